use async_trait::async_trait;
use auth::SessionToken;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::LoginCommand;
use crate::domain::user::models::User;

/// Port for the session lifecycle and per-request identity resolution.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Verify credentials and start a new session.
    ///
    /// # Arguments
    /// * `command` - Validated username and password
    ///
    /// # Returns
    /// Freshly issued token and its expiry, as persisted on the user
    ///
    /// # Errors
    /// * `Unauthenticated` - Unknown username or wrong password (same message)
    /// * `Credentials` - Stored hash is unreadable
    /// * `DatabaseError` - Database operation failed
    async fn login(&self, command: LoginCommand) -> Result<SessionToken, AuthError>;

    /// End the user's session. Clearing an absent session is not an error.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn logout(&self, user: &User) -> Result<(), AuthError>;

    /// Resolve the user behind a presented token.
    ///
    /// # Arguments
    /// * `token` - Raw header value, None when the header is missing
    ///
    /// # Returns
    /// The user whose stored token matches and has not expired
    ///
    /// # Errors
    /// * `Unauthenticated` - Token missing, unknown or expired
    /// * `DatabaseError` - Database operation failed
    async fn authenticate(&self, token: Option<&str>) -> Result<User, AuthError>;
}
