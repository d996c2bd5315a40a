use thiserror::Error;

/// Error type for session token configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token lifetime must be positive, got {0} days")]
    InvalidLifetime(i64),
}
