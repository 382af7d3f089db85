use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvError {
    #[error("Invalid action code {0}, expected one of 0 (noop), 1 (left), 2 (main), 3 (right)")]
    InvalidAction(u8),

    #[error("Environment stepped before reset")]
    UninitializedState,
}
