use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;
use auth::SessionToken;
use chrono::Utc;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::LoginCommand;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::user::models::User;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserRepository;

/// Domain service for login, logout and token resolution.
///
/// Tokens live on the user row, so the user repository doubles as the
/// token store.
pub struct AuthService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
}

impl<UR> AuthService<UR>
where
    UR: UserRepository,
{
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }
}

fn login_failure(username: &Username, err: AuthenticationError) -> AuthError {
    match err {
        AuthenticationError::InvalidCredentials => {
            tracing::info!(username = %username, "Login rejected");
            AuthError::Unauthenticated(AuthError::BAD_CREDENTIALS)
        }
        AuthenticationError::PasswordError(err) => {
            tracing::error!(username = %username, error = %err, "Stored password hash unreadable");
            AuthError::Credentials(err.to_string())
        }
    }
}

#[async_trait]
impl<UR> AuthServicePort for AuthService<UR>
where
    UR: UserRepository,
{
    async fn login(&self, command: LoginCommand) -> Result<SessionToken, AuthError> {
        let Some(user) = self.repository.find_by_username(&command.username).await? else {
            let rejection = self.authenticator.reject_unknown(&command.password);
            return Err(login_failure(&command.username, rejection));
        };

        let session = self
            .authenticator
            .authenticate(&command.password, &user.password_hash)
            .map_err(|e| login_failure(&user.username, e))?;

        self.repository
            .save_session(&user.username, Some(session.clone()))
            .await?;

        tracing::info!(
            username = %user.username,
            expires_at = session.expires_at,
            "User logged in"
        );

        Ok(session)
    }

    async fn logout(&self, user: &User) -> Result<(), AuthError> {
        self.repository.save_session(&user.username, None).await?;
        tracing::info!(username = %user.username, "User logged out");
        Ok(())
    }

    async fn authenticate(&self, token: Option<&str>) -> Result<User, AuthError> {
        let token = token
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or(AuthError::Unauthenticated(AuthError::UNAUTHORIZED))?;

        let user = self
            .repository
            .find_by_token(token)
            .await?
            .ok_or(AuthError::Unauthenticated(AuthError::UNAUTHORIZED))?;

        if !user.has_valid_session(Utc::now().timestamp_millis()) {
            return Err(AuthError::Unauthenticated(AuthError::UNAUTHORIZED));
        }

        Ok(user)
    }
}
