use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::TerminationReason;
use crate::env::{EnvError, LanderEnv};
use crate::rollout::{Policy, RolloutConfig};

/// Outcome of one episode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpisodeSummary {
    pub episode: u32,
    pub steps: u32,
    pub total_reward: f64,
    pub termination: Option<TerminationReason>,
    pub landed: bool,
    pub crash: bool,
}

/// Resets `env` and steps it with `policy` until the episode is done.
pub fn run_episode(env: &mut LanderEnv, policy: &mut dyn Policy) -> Result<EpisodeSummary, EnvError> {
    let mut observation = env.reset();

    loop {
        let action = policy.act(&observation);
        let result = env.step_action(action)?;
        observation = result.observation;

        if result.done {
            let episode = env.episode();
            return Ok(EpisodeSummary {
                episode: episode.episode,
                steps: result.info.steps,
                total_reward: episode.total_reward,
                termination: result.info.termination,
                landed: result.info.landed,
                crash: result.info.crash,
            });
        }
    }
}

/// Runs every episode of `config` on a single environment.
pub fn run_rollout(config: &RolloutConfig) -> Result<Vec<EpisodeSummary>, EnvError> {
    let mut env = LanderEnv::new();
    let mut policy = config.policy.build(config.seed);
    info!(
        "Running {} episode(s) with {:?} policy",
        config.episodes, config.policy
    );

    (0..config.episodes)
        .map(|_| run_episode(&mut env, policy.as_mut()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rollout::IdlePolicy;

    #[test]
    fn test_idle_episode_ends() {
        let mut env = LanderEnv::new();
        let summary = run_episode(&mut env, &mut IdlePolicy).unwrap();

        assert!(summary.termination.is_some());
        assert!(summary.steps <= 1000);
        assert_eq!(summary.episode, 1);
    }
}
