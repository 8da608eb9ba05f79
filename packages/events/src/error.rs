/// Error types for event construction
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EventError {
    #[error("Invalid user: {0}")]
    InvalidUser(String),

    #[error("Event properties must be a JSON object, got {0}")]
    InvalidProperties(String),
}

pub type Result<T> = std::result::Result<T, EventError>;
