//! `SeaORM` implementation of the `MovieService` trait.

use async_trait::async_trait;
use tracing::info;

use crate::db::Store;
use crate::domain::{Identity, MovieId};
use crate::models::movie::{Movie, MovieInput};
use crate::services::movie_service::{MovieError, MovieService};
use crate::services::validation::validate_movie;

pub struct SeaOrmMovieService {
    store: Store,
}

impl SeaOrmMovieService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl MovieService for SeaOrmMovieService {
    async fn list(&self) -> Result<Vec<Movie>, MovieError> {
        Ok(self.store.list_movies().await?)
    }

    async fn get(&self, id: MovieId) -> Result<Movie, MovieError> {
        self.store
            .get_movie(id.value())
            .await?
            .ok_or(MovieError::NotFound(id))
    }

    async fn create(&self, identity: &Identity, input: MovieInput) -> Result<Movie, MovieError> {
        validate_movie(&input)?;

        let movie = self.store.add_movie(&input).await?;
        info!(
            user = identity.username(),
            movie_id = movie.id,
            "Movie created"
        );
        Ok(movie)
    }

    async fn update(
        &self,
        identity: &Identity,
        id: MovieId,
        input: MovieInput,
    ) -> Result<Movie, MovieError> {
        if self.store.get_movie(id.value()).await?.is_none() {
            return Err(MovieError::NotFound(id));
        }

        validate_movie(&input)?;

        let movie = self
            .store
            .update_movie(id.value(), &input)
            .await?
            .ok_or(MovieError::NotFound(id))?;
        info!(user = identity.username(), movie_id = movie.id, "Movie updated");
        Ok(movie)
    }

    async fn delete(&self, identity: &Identity, id: MovieId) -> Result<(), MovieError> {
        if !self.store.delete_movie(id.value()).await? {
            return Err(MovieError::NotFound(id));
        }
        info!(user = identity.username(), movie_id = id.value(), "Movie deleted");
        Ok(())
    }
}
