//! Shared error type across mcgraph crates.

use thiserror::Error;

/// Stable result codes reported alongside errors (logs, tests, tooling).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultCode {
    /// Route could not be built from its settings.
    InvalidConfig,
    /// Downstream did not answer in time.
    Timeout,
    /// Destination answered with an error.
    RemoteError,
    /// Error produced inside the routing graph itself.
    LocalError,
}

impl ResultCode {
    /// String representation used in logs and test vectors.
    pub fn as_str(self) -> &'static str {
        match self {
            ResultCode::InvalidConfig => "INVALID_CONFIG",
            ResultCode::Timeout => "TIMEOUT",
            ResultCode::RemoteError => "REMOTE_ERROR",
            ResultCode::LocalError => "LOCAL_ERROR",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, McError>;

/// Unified error type used by core and routes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum McError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("timeout")]
    Timeout,
    #[error("remote error: {0}")]
    Remote(String),
    #[error("local error: {0}")]
    Local(String),
}

impl McError {
    /// Map an error to its stable result code.
    pub fn result_code(&self) -> ResultCode {
        match self {
            McError::InvalidConfig(_) => ResultCode::InvalidConfig,
            McError::Timeout => ResultCode::Timeout,
            McError::Remote(_) => ResultCode::RemoteError,
            McError::Local(_) => ResultCode::LocalError,
        }
    }
}
