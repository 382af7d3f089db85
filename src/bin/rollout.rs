use lander::rollout::{run_rollout, RolloutConfig};

fn main() {
    let config = match std::env::args().nth(1) {
        Some(path) => match RolloutConfig::from_file(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => RolloutConfig::default(),
    };

    match run_rollout(&config) {
        Ok(summaries) => {
            for summary in summaries {
                match serde_json::to_string(&summary) {
                    Ok(line) => println!("{}", line),
                    Err(e) => eprintln!("Failed to serialize summary: {}", e),
                }
            }
        }
        Err(e) => {
            eprintln!("Rollout failed: {}", e);
            std::process::exit(1);
        }
    }
}
