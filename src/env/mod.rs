mod episode;
mod error;
mod lander;
mod observation;

pub use episode::{EnvStatus, EpisodeState};
pub use error::EnvError;
pub use lander::{CraftPose, LanderEnv, StepInfo, StepResult};
pub use observation::Observation;
