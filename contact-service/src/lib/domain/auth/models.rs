use crate::domain::user::models::Username;
use crate::domain::user::models::MAX_FIELD_LENGTH;
use crate::domain::validation::ValidationErrors;

/// Credentials presented at login.
#[derive(Debug)]
pub struct LoginCommand {
    pub username: Username,
    pub password: String,
}

impl LoginCommand {
    /// Validate raw login input.
    ///
    /// Only the shape is checked here. Whether the account exists is decided
    /// by the service, which reports every mismatch the same way.
    pub fn new(username: Option<String>, password: Option<String>) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let username = errors.required("username", username, MAX_FIELD_LENGTH);
        let username = errors.value("username", Username::new(username));
        let password = errors.required("password", password, MAX_FIELD_LENGTH);

        match username {
            Some(username) => errors.finish(Self { username, password }),
            None => Err(errors),
        }
    }
}
