mod physics;
mod scene;

pub use physics::{LanderPhysicsPlugin, PhysicsSet};
pub use scene::{craft_mass_properties, spawn_scene, SceneEntities};
