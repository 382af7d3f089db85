use serde::{Deserialize, Serialize};

use crate::components::{Action, TaskComponent};
use crate::env::Observation;
use crate::utils::constants::*;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LandingParams {
    /// Shaping weight on normalized distance from the pad at the origin
    pub distance_weight: f64,
    /// Shaping weight on normalized speed
    pub speed_weight: f64,
    /// Shaping weight on |angle|
    pub angle_weight: f64,
    /// Shaping weight on normalized |angular velocity|
    pub angular_velocity_weight: f64,
    /// Shaping bonus per leg in contact
    pub contact_weight: f64,
    pub main_engine_cost: f64,
    pub side_engine_cost: f64,
    /// Horizontal bound on |x| (m)
    pub max_abs_x: f64,
    /// Ceiling on altitude (m)
    pub max_y: f64,
    /// Hull clearance below which a legless touch is a crash (m)
    pub crash_altitude: f64,
    /// Hull clearance below which a slow, level, two-leg touch is a landing (m)
    pub landing_altitude: f64,
    /// Maximum normalized speed for a landing
    pub landing_speed: f64,
    /// Maximum |angle| for a landing (rad)
    pub landing_angle: f64,
    pub max_steps: u32,
    /// Magnitude of the crash/out-of-bounds penalty and the landing bonus
    pub terminal_reward: f64,
}

impl Default for LandingParams {
    fn default() -> Self {
        Self {
            distance_weight: DISTANCE_WEIGHT,
            speed_weight: SPEED_WEIGHT,
            angle_weight: ANGLE_WEIGHT,
            angular_velocity_weight: ANGULAR_VELOCITY_WEIGHT,
            contact_weight: CONTACT_WEIGHT,
            main_engine_cost: MAIN_ENGINE_FUEL_COST,
            side_engine_cost: SIDE_ENGINE_FUEL_COST,
            max_abs_x: MAX_ABS_X,
            max_y: MAX_Y,
            crash_altitude: CRASH_ALTITUDE,
            landing_altitude: LANDING_ALTITUDE,
            landing_speed: LANDING_SPEED,
            landing_angle: LANDING_ANGLE,
            max_steps: MAX_STEPS,
            terminal_reward: TERMINAL_REWARD,
        }
    }
}

impl TaskComponent {
    /// Potential of an observation. Closer, slower, more level and better
    /// supported states score higher.
    pub fn shaping(&self, obs: &Observation) -> f64 {
        let p = &self.params;
        -p.distance_weight * obs.distance()
            - p.speed_weight * obs.speed()
            - p.angle_weight * obs.angle.abs()
            - p.angular_velocity_weight * obs.angular_velocity.abs()
            + p.contact_weight * f64::from(obs.contact_count())
    }

    /// Per-step reward contribution of spending fuel (never positive).
    pub fn fuel_reward(&self, action: Action) -> f64 {
        match action {
            Action::Noop => 0.0,
            Action::Main => -self.params.main_engine_cost,
            Action::Left | Action::Right => -self.params.side_engine_cost,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn obs_at(x: f64, y: f64) -> Observation {
        Observation {
            x,
            y,
            ..Default::default()
        }
    }

    #[test]
    fn test_shaping_prefers_origin() {
        let task = TaskComponent::default();
        assert!(task.shaping(&obs_at(0.0, 0.1)) > task.shaping(&obs_at(0.5, 0.5)));
        assert_relative_eq!(task.shaping(&obs_at(0.3, 0.4)), -50.0, epsilon = 1e-12);
    }

    #[test]
    fn test_shaping_penalizes_motion_and_tilt() {
        let task = TaskComponent::default();
        let still = obs_at(0.0, 0.5);
        let moving = Observation {
            vx: 0.3,
            vy: -0.4,
            ..still
        };
        let tilted = Observation {
            angle: 0.5,
            angular_velocity: -0.2,
            ..still
        };

        assert_relative_eq!(task.shaping(&still) - task.shaping(&moving), 20.0, epsilon = 1e-12);
        assert_relative_eq!(task.shaping(&still) - task.shaping(&tilted), 7.0, epsilon = 1e-12);
    }

    #[test]
    fn test_two_legs_outweigh_one() {
        let task = TaskComponent::default();
        let none = obs_at(0.0, 0.05);
        let one = Observation {
            left_contact: 1.0,
            ..none
        };
        let both = Observation {
            left_contact: 1.0,
            right_contact: 1.0,
            ..none
        };

        assert!(task.shaping(&both) > task.shaping(&one));
        assert!(task.shaping(&one) > task.shaping(&none));
    }

    #[test]
    fn test_fuel_costs() {
        let task = TaskComponent::default();
        assert_eq!(task.fuel_reward(Action::Noop), 0.0);
        assert_relative_eq!(task.fuel_reward(Action::Main), -0.3);
        assert_relative_eq!(task.fuel_reward(Action::Left), -0.03);
        assert_relative_eq!(task.fuel_reward(Action::Right), -0.03);
    }
}
