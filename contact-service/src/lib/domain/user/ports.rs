use async_trait::async_trait;
use auth::SessionToken;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::Username;

/// Port for user profile operations.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Register a new user.
    ///
    /// # Arguments
    /// * `command` - Validated username, password and display name
    ///
    /// # Returns
    /// Created user entity (logged out)
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `Password` - Password hashing failed
    /// * `DatabaseError` - Database operation failed
    async fn register(&self, command: RegisterUserCommand) -> Result<User, UserError>;

    /// Reload the authenticated user from storage.
    ///
    /// # Errors
    /// * `NotFound` - User was removed after authentication
    /// * `DatabaseError` - Database operation failed
    async fn get(&self, user: &User) -> Result<User, UserError>;

    /// Update the authenticated user's name and/or password.
    ///
    /// # Arguments
    /// * `user` - Authenticated user
    /// * `command` - Optional new name and password
    ///
    /// # Returns
    /// Updated user entity
    ///
    /// # Errors
    /// * `NotFound` - User was removed after authentication
    /// * `Password` - Password hashing failed
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, user: &User, command: UpdateUserCommand) -> Result<User, UserError>;
}

/// Persistence operations for the user aggregate, including its token store.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist a new user.
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, user: User) -> Result<User, UserError>;

    /// Retrieve user by username.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError>;

    /// Retrieve the user currently holding `token`, expired or not.
    ///
    /// # Returns
    /// Optional user entity (None if no user holds the token)
    async fn find_by_token(&self, token: &str) -> Result<Option<User>, UserError>;

    /// Overwrite name and password hash.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update_profile(&self, user: User) -> Result<User, UserError>;

    /// Store or clear the user's session token and expiry together.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Database operation failed
    async fn save_session(
        &self,
        username: &Username,
        session: Option<SessionToken>,
    ) -> Result<(), UserError>;
}
