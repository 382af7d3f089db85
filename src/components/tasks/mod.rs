mod landing;
mod termination;

pub use landing::LandingParams;
pub use termination::{FlightState, TerminationReason};

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Task attached to the craft: what the reward rewards and when the episode ends.
#[derive(Component, Deserialize, Serialize, Debug, Clone, Default)]
pub struct TaskComponent {
    pub params: LandingParams,
}
