pub mod config;
mod contact;

pub use config::PhysicsConfig;
pub use contact::ContactFlags;
