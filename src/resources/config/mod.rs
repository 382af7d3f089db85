mod physics;

pub use physics::PhysicsConfig;
