use thiserror::Error;

use crate::domain::user::errors::UserError;
use crate::domain::validation::ValidationErrors;

/// Errors raised while logging in, logging out or resolving a token.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] ValidationErrors),

    /// Missing, unknown or expired token, or rejected credentials.
    #[error("{0}")]
    Unauthenticated(&'static str),

    #[error("Credential check failed: {0}")]
    Credentials(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl AuthError {
    pub const UNAUTHORIZED: &'static str = "Unauthorized";
    pub const BAD_CREDENTIALS: &'static str = "Username or password wrong";
}

impl From<UserError> for AuthError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::InvalidInput(errors) => AuthError::InvalidInput(errors),
            UserError::NotFound(_) => AuthError::Unauthenticated(Self::UNAUTHORIZED),
            UserError::Password(e) => AuthError::Credentials(e.to_string()),
            UserError::DatabaseError(msg) => AuthError::DatabaseError(msg),
            UserError::UsernameAlreadyExists(_) | UserError::Unknown(_) => {
                AuthError::Unknown(err.to_string())
            }
        }
    }
}
