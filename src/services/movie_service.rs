//! Domain service for the movie list.

use thiserror::Error;

use crate::domain::{Identity, MovieId};
use crate::models::movie::{Movie, MovieInput};
use crate::services::validation::ValidationError;

#[derive(Debug, Error)]
pub enum MovieError {
    #[error("Movie not found: {0}")]
    NotFound(MovieId),

    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sea_orm::DbErr> for MovieError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<anyhow::Error> for MovieError {
    fn from(err: anyhow::Error) -> Self {
        Self::Database(format!("{err:#}"))
    }
}

/// Domain service trait for movie CRUD.
///
/// Mutations take the caller's [`Identity`]; reads are public.
#[async_trait::async_trait]
pub trait MovieService: Send + Sync {
    /// Lists every movie in insertion order.
    async fn list(&self) -> Result<Vec<Movie>, MovieError>;

    /// # Errors
    ///
    /// Returns [`MovieError::NotFound`] if the movie does not exist.
    async fn get(&self, id: MovieId) -> Result<Movie, MovieError>;

    /// # Errors
    ///
    /// Returns [`MovieError::Validation`] without writing anything when the
    /// input is rejected.
    async fn create(&self, identity: &Identity, input: MovieInput) -> Result<Movie, MovieError>;

    /// Overwrites title and year of an existing movie.
    ///
    /// # Errors
    ///
    /// - Returns [`MovieError::NotFound`] if the movie does not exist, checked
    ///   before the input is validated
    /// - Returns [`MovieError::Validation`] when the input is rejected
    async fn update(
        &self,
        identity: &Identity,
        id: MovieId,
        input: MovieInput,
    ) -> Result<Movie, MovieError>;

    /// # Errors
    ///
    /// Returns [`MovieError::NotFound`] if the movie does not exist.
    async fn delete(&self, identity: &Identity, id: MovieId) -> Result<(), MovieError>;
}
