use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EnvStatus {
    #[default]
    Uninitialized,
    Running,
    /// A termination condition fired. Stepping further is still allowed.
    Done,
}

/// Counters for the current episode plus the running totals a driver shows.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EpisodeState {
    /// Number of resets so far
    pub episode: u32,
    pub steps: u32,
    /// Shaping value of the previous step, `None` until the first step
    pub prev_shaping: Option<f64>,
    pub total_reward: f64,
    pub last_reward: f64,
    pub status: EnvStatus,
}

impl EpisodeState {
    /// Starts the next episode, keeping only the episode index.
    pub fn begin(&mut self) {
        *self = Self {
            episode: self.episode + 1,
            status: EnvStatus::Running,
            ..Default::default()
        };
    }

    /// Records a step reward and returns the shaping difference to pay out.
    pub fn advance(&mut self, shaping: f64) -> f64 {
        self.steps += 1;
        let delta = self.prev_shaping.map_or(0.0, |prev| shaping - prev);
        self.prev_shaping = Some(shaping);
        delta
    }

    pub fn record(&mut self, reward: f64, done: bool) {
        self.last_reward = reward;
        self.total_reward += reward;
        if done {
            self.status = EnvStatus::Done;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_first_step_skips_shaping_difference() {
        let mut episode = EpisodeState::default();
        episode.begin();

        assert_eq!(episode.advance(-50.0), 0.0);
        assert_relative_eq!(episode.advance(-45.0), 5.0);
        assert_eq!(episode.steps, 2);
        assert_eq!(episode.prev_shaping, Some(-45.0));
    }

    #[test]
    fn test_begin_clears_counters() {
        let mut episode = EpisodeState::default();
        episode.begin();
        episode.advance(-10.0);
        episode.record(-3.0, true);
        assert_eq!(episode.status, EnvStatus::Done);

        episode.begin();

        assert_eq!(episode.episode, 2);
        assert_eq!(episode.steps, 0);
        assert_eq!(episode.prev_shaping, None);
        assert_eq!(episode.total_reward, 0.0);
        assert_eq!(episode.status, EnvStatus::Running);
    }
}
