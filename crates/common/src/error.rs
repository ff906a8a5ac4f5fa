//! Error types for the cloud agent SDK

use thiserror::Error;

/// Result type alias using the SDK Error
pub type Result<T> = std::result::Result<T, Error>;

/// SDK error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Resource not found: {kind} {name}")]
    NotFound { kind: String, name: String },

    #[error("Transport error: {0}")]
    Transport(#[from] tonic::transport::Error),

    #[error("Remote call failed: {0}")]
    Remote(#[from] tonic::Status),

    #[error("Agent error: {0}")]
    Agent(String),

    #[error("Unexpected response: {0}")]
    Internal(String),

    #[error("Authorization error: {0}")]
    Auth(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn not_found(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Error::NotFound {
            kind: kind.into(),
            name: name.into(),
        }
    }

    /// True for a local not-found as well as a NOT_FOUND status from the agent.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::NotFound { .. } => true,
            Error::Remote(status) => status.code() == tonic::Code::NotFound,
            _ => false,
        }
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Error::InvalidInput(_))
    }
}
