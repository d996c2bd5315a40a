use chrono::Duration;
use chrono::Utc;
use uuid::Uuid;

use super::errors::TokenError;

/// Opaque bearer token paired with its expiry instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionToken {
    /// Random token value handed to the client
    pub token: String,

    /// Expiry as Unix epoch milliseconds
    pub expires_at: i64,
}

impl SessionToken {
    /// Check whether the token is still usable at the given instant.
    ///
    /// A token is valid only while its expiry is strictly after `now_millis`.
    pub fn is_valid_at(&self, now_millis: i64) -> bool {
        self.expires_at > now_millis
    }
}

/// Session token generator.
///
/// Tokens are random UUID v4 strings drawn from the operating system CSPRNG,
/// so they carry no user data and cannot be forged from a known token.
#[derive(Debug, Clone)]
pub struct TokenIssuer {
    ttl: Duration,
}

impl TokenIssuer {
    /// Default session lifetime.
    pub const DEFAULT_TTL_DAYS: i64 = 30;

    /// Create an issuer whose tokens live for `days` days.
    ///
    /// # Arguments
    /// * `days` - Token lifetime in days
    ///
    /// # Returns
    /// Configured TokenIssuer
    ///
    /// # Errors
    /// * `InvalidLifetime` - `days` is zero or negative
    pub fn with_ttl_days(days: i64) -> Result<Self, TokenError> {
        if days <= 0 {
            return Err(TokenError::InvalidLifetime(days));
        }

        Ok(Self {
            ttl: Duration::days(days),
        })
    }

    /// Token lifetime in milliseconds.
    pub fn ttl_millis(&self) -> i64 {
        self.ttl.num_milliseconds()
    }

    /// Issue a fresh token starting now.
    pub fn issue(&self) -> SessionToken {
        self.issue_at(Utc::now().timestamp_millis())
    }

    /// Issue a fresh token starting at `now_millis`.
    ///
    /// # Arguments
    /// * `now_millis` - Issuance instant as Unix epoch milliseconds
    ///
    /// # Returns
    /// SessionToken expiring exactly one lifetime after `now_millis`
    pub fn issue_at(&self, now_millis: i64) -> SessionToken {
        SessionToken {
            token: Uuid::new_v4().to_string(),
            expires_at: now_millis + self.ttl_millis(),
        }
    }
}

impl Default for TokenIssuer {
    fn default() -> Self {
        Self {
            ttl: Duration::days(Self::DEFAULT_TTL_DAYS),
        }
    }
}
