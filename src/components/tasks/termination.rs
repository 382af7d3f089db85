use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::components::TaskComponent;

/// Why an episode ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TerminationReason {
    OutOfBounds,
    Crashed,
    Landed,
    StepLimit,
}

/// Snapshot of the quantities the termination rules look at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightState {
    /// Raw world position (m)
    pub position: Vector2<f64>,
    /// Hull clearance above the ground (m)
    pub altitude: f64,
    pub left_contact: bool,
    pub right_contact: bool,
    /// Normalized speed taken from the observation
    pub speed: f64,
    /// Wrapped angle taken from the observation (rad)
    pub angle: f64,
    pub steps: u32,
}

impl TaskComponent {
    /// Checks the termination rules in priority order and returns the first
    /// that fires. At most one reason is ever reported for a step.
    pub fn check_termination(&self, state: &FlightState) -> Option<TerminationReason> {
        let p = &self.params;
        let any_contact = state.left_contact || state.right_contact;
        let both_contact = state.left_contact && state.right_contact;

        if state.position.x.abs() > p.max_abs_x || state.position.y > p.max_y {
            Some(TerminationReason::OutOfBounds)
        } else if state.altitude < p.crash_altitude && !any_contact {
            Some(TerminationReason::Crashed)
        } else if state.altitude < p.landing_altitude
            && both_contact
            && state.speed < p.landing_speed
            && state.angle.abs() < p.landing_angle
        {
            Some(TerminationReason::Landed)
        } else if state.steps >= p.max_steps {
            Some(TerminationReason::StepLimit)
        } else {
            None
        }
    }

    /// Bonus or penalty paid on the step that ends the episode.
    pub fn terminal_reward(&self, reason: TerminationReason) -> f64 {
        match reason {
            TerminationReason::OutOfBounds | TerminationReason::Crashed => {
                -self.params.terminal_reward
            }
            TerminationReason::Landed => self.params.terminal_reward,
            TerminationReason::StepLimit => 0.0,
        }
    }
}
