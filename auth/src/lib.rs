//! Authentication utilities library
//!
//! Provides reusable credential infrastructure for services:
//! - Password hashing (Argon2id)
//! - Opaque session token issuance with expiry
//! - Authentication coordination
//!
//! Services own the persistence of tokens. This crate only produces and checks
//! the values they store.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## Session Tokens
//! ```
//! use auth::TokenIssuer;
//!
//! let issuer = TokenIssuer::default();
//! let session = issuer.issue_at(1_000);
//! assert_eq!(session.expires_at, 1_000 + issuer.ttl_millis());
//! assert!(session.is_valid_at(1_001));
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::Authenticator;
//!
//! let auth = Authenticator::default();
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and issue a session token
//! let session = auth.authenticate("password123", &hash).unwrap();
//! println!("Token: {}", session.token);
//! ```

pub mod authenticator;
pub mod password;
pub mod token;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::Authenticator;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::SessionToken;
pub use token::TokenError;
pub use token::TokenIssuer;
