use thiserror::Error;

use crate::domain::contact::errors::ContactError;
use crate::domain::validation::ValidationErrors;

/// Top-level error for address operations
#[derive(Debug, Clone, Error)]
pub enum AddressError {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] ValidationErrors),

    /// Parent contact absent or owned by another user
    #[error("Contact not found")]
    ContactNotFound(String),

    #[error("Address not found")]
    NotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<ContactError> for AddressError {
    fn from(err: ContactError) -> Self {
        match err {
            ContactError::InvalidInput(errors) => AddressError::InvalidInput(errors),
            ContactError::NotFound(id) => AddressError::ContactNotFound(id),
            ContactError::DatabaseError(msg) => AddressError::DatabaseError(msg),
            ContactError::Unknown(msg) => AddressError::Unknown(msg),
        }
    }
}

impl From<anyhow::Error> for AddressError {
    fn from(err: anyhow::Error) -> Self {
        AddressError::Unknown(err.to_string())
    }
}
