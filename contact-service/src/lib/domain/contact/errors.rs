use thiserror::Error;

use crate::domain::validation::ValidationErrors;

/// Top-level error for contact operations
#[derive(Debug, Clone, Error)]
pub enum ContactError {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] ValidationErrors),

    /// Absent, or owned by someone else. The two are never told apart.
    #[error("Contact not found")]
    NotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for ContactError {
    fn from(err: anyhow::Error) -> Self {
        ContactError::Unknown(err.to_string())
    }
}
