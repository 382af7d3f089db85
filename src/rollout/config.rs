use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::rollout::{HeuristicPolicy, HoverPolicy, IdlePolicy, Policy, RandomPolicy};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Invalid rollout configuration: {0}")]
    ValidationError(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyKind {
    Idle,
    Hover,
    Random,
    #[default]
    Heuristic,
}

impl PolicyKind {
    pub fn build(self, seed: Option<u64>) -> Box<dyn Policy> {
        match self {
            PolicyKind::Idle => Box::new(IdlePolicy),
            PolicyKind::Hover => Box::new(HoverPolicy::default()),
            PolicyKind::Random => Box::new(RandomPolicy::new(seed)),
            PolicyKind::Heuristic => Box::new(HeuristicPolicy::default()),
        }
    }
}

/// Settings for a batch of episodes driven by one policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RolloutConfig {
    pub episodes: u32,
    pub policy: PolicyKind,
    /// Seed for stochastic policies; entropy when absent
    pub seed: Option<u64>,
}

impl Default for RolloutConfig {
    fn default() -> Self {
        Self {
            episodes: 1,
            policy: PolicyKind::default(),
            seed: None,
        }
    }
}

impl RolloutConfig {
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.episodes == 0 {
            return Err(ConfigError::ValidationError(
                "episodes must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config = RolloutConfig::from_yaml("policy: random\nseed: 3\n").unwrap();
        assert_eq!(
            config,
            RolloutConfig {
                episodes: 1,
                policy: PolicyKind::Random,
                seed: Some(3),
            }
        );
    }

    #[test]
    fn test_zero_episodes_rejected() {
        let result = RolloutConfig::from_yaml("episodes: 0\n");
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_unknown_policy_rejected() {
        let result = RolloutConfig::from_yaml("policy: autopilot\n");
        assert!(matches!(result, Err(ConfigError::YamlError(_))));
    }
}
