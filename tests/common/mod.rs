mod assertions;
mod helpers;

// Re-export
pub use assertions::{assert_contacts_binary, assert_observation_valid};

pub use helpers::*;
