//! Domain service for logging in and checking session identities.

use thiserror::Error;

use crate::domain::Identity;

/// Errors specific to authentication operations.
///
/// Every credential problem collapses into [`AuthError::InvalidCredentials`]
/// so callers cannot tell a wrong username from a wrong password.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sea_orm::DbErr> for AuthError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<anyhow::Error> for AuthError {
    fn from(err: anyhow::Error) -> Self {
        Self::Database(format!("{err:#}"))
    }
}

/// Domain service trait for authentication.
#[async_trait::async_trait]
pub trait AuthService: Send + Sync {
    /// Verifies credentials against the sole account and mints an identity.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`] if either field is empty or
    /// does not match.
    async fn login(&self, username: &str, password: &str) -> Result<Identity, AuthError>;

    /// Checks that an identity read back from a session still refers to the
    /// stored account. Returns `false` once the account was replaced or its
    /// username changed.
    async fn is_current(&self, identity: &Identity) -> Result<bool, AuthError>;
}
