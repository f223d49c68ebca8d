use anyhow::{Context, Result};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryOrder, Set};

use crate::entities::movies;
use crate::models::movie::{Movie, MovieInput};

pub struct MovieRepository {
    conn: DatabaseConnection,
}

impl MovieRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// All movies in insertion order
    pub async fn list(&self) -> Result<Vec<Movie>> {
        let rows = movies::Entity::find()
            .order_by_asc(movies::Column::Id)
            .all(&self.conn)
            .await
            .context("Failed to list movies")?;

        Ok(rows.into_iter().map(Movie::from).collect())
    }

    pub async fn get(&self, id: i32) -> Result<Option<Movie>> {
        let row = movies::Entity::find_by_id(id)
            .one(&self.conn)
            .await
            .with_context(|| format!("Failed to query movie {id}"))?;

        Ok(row.map(Movie::from))
    }

    pub async fn add(&self, input: &MovieInput) -> Result<Movie> {
        let active = movies::ActiveModel {
            title: Set(input.title.clone()),
            year: Set(input.year.clone()),
            ..Default::default()
        };

        let model = active
            .insert(&self.conn)
            .await
            .context("Failed to insert movie")?;

        Ok(Movie::from(model))
    }

    pub async fn add_many(&self, inputs: &[MovieInput]) -> Result<usize> {
        if inputs.is_empty() {
            return Ok(0);
        }

        let models = inputs.iter().map(|input| movies::ActiveModel {
            title: Set(input.title.clone()),
            year: Set(input.year.clone()),
            ..Default::default()
        });

        movies::Entity::insert_many(models)
            .exec(&self.conn)
            .await
            .context("Failed to insert movies")?;

        Ok(inputs.len())
    }

    /// Overwrite title and year. Returns `None` when the movie does not exist.
    pub async fn update(&self, id: i32, input: &MovieInput) -> Result<Option<Movie>> {
        let Some(model) = movies::Entity::find_by_id(id)
            .one(&self.conn)
            .await
            .with_context(|| format!("Failed to query movie {id}"))?
        else {
            return Ok(None);
        };

        let mut active: movies::ActiveModel = model.into();
        active.title = Set(input.title.clone());
        active.year = Set(input.year.clone());
        let updated = active
            .update(&self.conn)
            .await
            .with_context(|| format!("Failed to update movie {id}"))?;

        Ok(Some(Movie::from(updated)))
    }

    /// Returns `false` when the movie does not exist.
    pub async fn delete(&self, id: i32) -> Result<bool> {
        let Some(model) = movies::Entity::find_by_id(id)
            .one(&self.conn)
            .await
            .with_context(|| format!("Failed to query movie {id}"))?
        else {
            return Ok(false);
        };

        model
            .delete(&self.conn)
            .await
            .with_context(|| format!("Failed to delete movie {id}"))?;

        Ok(true)
    }
}
