mod config;
mod policy;
mod runner;

pub use config::{ConfigError, PolicyKind, RolloutConfig};
pub use policy::{HeuristicPolicy, HoverPolicy, IdlePolicy, Policy, RandomPolicy};
pub use runner::{run_episode, run_rollout, EpisodeSummary};
