pub mod components;
pub mod env;
pub mod plugins;
pub mod resources;
pub mod rollout;
pub mod systems;
pub mod utils;

pub use components::{tasks::TerminationReason, Action, Leg, ThrusterInput};
pub use env::{
    CraftPose, EnvError, EnvStatus, EpisodeState, LanderEnv, Observation, StepInfo, StepResult,
};
