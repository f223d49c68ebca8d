//! Domain service for the account's display name.

use thiserror::Error;

use crate::domain::Identity;
use crate::models::user::User;
use crate::services::validation::ValidationError;

#[derive(Debug, Error)]
pub enum UserError {
    #[error("User not found")]
    NotFound,

    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sea_orm::DbErr> for UserError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<anyhow::Error> for UserError {
    fn from(err: anyhow::Error) -> Self {
        Self::Database(format!("{err:#}"))
    }
}

#[async_trait::async_trait]
pub trait UserService: Send + Sync {
    /// The sole account, if one exists.
    async fn current(&self) -> Result<Option<User>, UserError>;

    /// # Errors
    ///
    /// Returns [`UserError::Validation`] for an empty or over-long name.
    async fn rename(&self, identity: &Identity, name: &str) -> Result<User, UserError>;
}
