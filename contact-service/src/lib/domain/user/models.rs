use std::fmt;

use auth::SessionToken;

use crate::domain::user::errors::UsernameError;
use crate::domain::validation::ValidationErrors;

/// Maximum length of user-supplied text fields.
pub const MAX_FIELD_LENGTH: usize = 100;

/// User aggregate entity.
///
/// `session` holds the bearer token and its expiry together, so a token can
/// never exist without an expiry or the other way round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub username: Username,
    pub name: String,
    pub password_hash: String,
    pub session: Option<SessionToken>,
}

impl User {
    /// Whether the user holds a token that is still valid at `now_millis`.
    pub fn has_valid_session(&self, now_millis: i64) -> bool {
        self.session
            .as_ref()
            .map_or(false, |session| session.is_valid_at(now_millis))
    }
}

/// Username value type, also the user primary key.
///
/// Non-blank, at most 100 characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    /// Create a new valid username.
    ///
    /// # Errors
    /// * `Blank` - Username is empty or whitespace
    /// * `TooLong` - Username longer than 100 characters
    pub fn new(username: String) -> Result<Self, UsernameError> {
        if username.trim().is_empty() {
            return Err(UsernameError::Blank);
        }

        let length = username.chars().count();
        if length > MAX_FIELD_LENGTH {
            return Err(UsernameError::TooLong {
                max: MAX_FIELD_LENGTH,
                actual: length,
            });
        }

        Ok(Self(username))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to register a new user.
#[derive(Debug)]
pub struct RegisterUserCommand {
    pub username: Username,
    pub password: String,
    pub name: String,
}

impl RegisterUserCommand {
    /// Validate raw registration input.
    ///
    /// # Errors
    /// Field map covering every invalid field
    pub fn new(
        username: Option<String>,
        password: Option<String>,
        name: Option<String>,
    ) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let username = errors.required("username", username, MAX_FIELD_LENGTH);
        let username = errors.value("username", Username::new(username));
        let password = errors.required("password", password, MAX_FIELD_LENGTH);
        let name = errors.required("name", name, MAX_FIELD_LENGTH);

        match username {
            Some(username) => errors.finish(Self {
                username,
                password,
                name,
            }),
            None => Err(errors),
        }
    }
}

/// Command to update the current user's profile.
///
/// Only provided fields are changed.
#[derive(Debug)]
pub struct UpdateUserCommand {
    pub name: Option<String>,
    pub password: Option<String>,
}

impl UpdateUserCommand {
    pub fn new(name: Option<String>, password: Option<String>) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let name = errors.present("name", name, MAX_FIELD_LENGTH);
        let password = errors.present("password", password, MAX_FIELD_LENGTH);

        errors.finish(Self { name, password })
    }
}
