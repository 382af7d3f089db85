use lander::{rollout::Policy, Action, LanderEnv, StepResult};

/// Creates an environment that has already been reset
pub fn create_test_env() -> LanderEnv {
    let mut env = LanderEnv::new();
    env.reset();
    env
}

/// Steps through a fixed action sequence, ignoring `done`
pub fn run_actions(env: &mut LanderEnv, actions: &[Action]) -> Vec<StepResult> {
    actions
        .iter()
        .map(|&action| env.step_action(action).unwrap())
        .collect()
}

/// Steps with `policy` until the episode reports done or `max_steps` is hit
pub fn run_until_done(
    env: &mut LanderEnv,
    policy: &mut dyn Policy,
    max_steps: usize,
) -> Vec<StepResult> {
    let mut results = Vec::new();
    let mut observation = env.reset();

    for _ in 0..max_steps {
        let result = env.step_action(policy.act(&observation)).unwrap();
        observation = result.observation;
        results.push(result);
        if result.done {
            break;
        }
    }

    results
}
