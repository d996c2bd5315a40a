use crate::password::PasswordError;
use crate::password::PasswordHasher;
use crate::token::SessionToken;
use crate::token::TokenIssuer;

/// Authentication coordinator combining password verification and session
/// token issuance.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_issuer: TokenIssuer,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `token_issuer` - Issuer used for successful logins
    ///
    /// # Returns
    /// Configured Authenticator instance
    pub fn new(token_issuer: TokenIssuer) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            token_issuer,
        }
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify credentials and issue a session token.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash
    ///
    /// # Returns
    /// Newly issued SessionToken
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `PasswordError` - Stored hash is unreadable
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
    ) -> Result<SessionToken, AuthenticationError> {
        if !self.password_hasher.verify(password, stored_hash)? {
            return Err(AuthenticationError::InvalidCredentials);
        }

        Ok(self.token_issuer.issue())
    }

    /// Reject a login for an account that does not exist.
    ///
    /// Performs a decoy verification so the failure costs the same as a
    /// wrong password, then returns `InvalidCredentials`.
    pub fn reject_unknown(&self, password: &str) -> AuthenticationError {
        self.password_hasher.verify_decoy(password);
        AuthenticationError::InvalidCredentials
    }

    /// Token lifetime in milliseconds.
    pub fn token_ttl_millis(&self) -> i64 {
        self.token_issuer.ttl_millis()
    }
}

impl Default for Authenticator {
    fn default() -> Self {
        Self::new(TokenIssuer::default())
    }
}
