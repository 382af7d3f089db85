use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::components::Action;
use crate::env::Observation;

/// Chooses one action per step from the latest observation.
pub trait Policy {
    fn act(&mut self, observation: &Observation) -> Action;
}

/// Never fires an engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdlePolicy;

impl Policy for IdlePolicy {
    fn act(&mut self, _observation: &Observation) -> Action {
        Action::Noop
    }
}

/// Holds altitude with the main engine alone.
#[derive(Debug, Clone, Copy)]
pub struct HoverPolicy {
    /// Normalized height below which the engine always fires
    pub floor: f64,
}

impl Default for HoverPolicy {
    fn default() -> Self {
        Self { floor: 0.4 }
    }
}

impl Policy for HoverPolicy {
    fn act(&mut self, observation: &Observation) -> Action {
        if observation.vy < 0.0 || observation.y < self.floor {
            Action::Main
        } else {
            Action::Noop
        }
    }
}

/// Uniformly random actions from a seeded generator.
#[derive(Debug, Clone)]
pub struct RandomPolicy {
    rng: ChaCha8Rng,
}

impl RandomPolicy {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => {
                info!("Random policy seeded with {}", seed);
                ChaCha8Rng::seed_from_u64(seed)
            }
            None => {
                warn!("No seed provided, using entropy");
                ChaCha8Rng::from_entropy()
            }
        };
        Self { rng }
    }
}

impl Policy for RandomPolicy {
    fn act(&mut self, _observation: &Observation) -> Action {
        Action::ALL[self.rng.gen_range(0..Action::ALL.len())]
    }
}

/// PD controller that leans toward the pad and brakes the descent.
#[derive(Debug, Clone, Copy)]
pub struct HeuristicPolicy {
    pub max_lean: f64,
    /// Dead band around zero for both control errors
    pub threshold: f64,
}

impl Default for HeuristicPolicy {
    fn default() -> Self {
        Self {
            max_lean: 0.4,
            threshold: 0.05,
        }
    }
}

impl Policy for HeuristicPolicy {
    fn act(&mut self, obs: &Observation) -> Action {
        // Leaning counter-clockwise steers the main engine toward -x
        let lean_target = (0.5 * obs.x + obs.vx).clamp(-self.max_lean, self.max_lean);
        let hover_target = 0.55 * obs.x.abs();

        let (turn, lift) = if obs.contact_count() > 0 {
            (0.0, -0.5 * obs.vy)
        } else {
            (
                0.5 * (lean_target - obs.angle) - obs.angular_velocity,
                0.5 * (hover_target - obs.y) - obs.vy,
            )
        };

        if lift > turn.abs() && lift > self.threshold {
            Action::Main
        } else if turn > self.threshold {
            Action::Left
        } else if turn < -self.threshold {
            Action::Right
        } else {
            Action::Noop
        }
    }
}
