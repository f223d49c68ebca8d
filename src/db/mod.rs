use anyhow::{Context, Result};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use std::path::Path;
use std::time::Duration;
use tracing::info;

use crate::config::SecurityConfig;
use crate::models::movie::{Movie, MovieInput};
use crate::models::user::User;

pub mod migrator;
pub mod repositories;

#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
}

impl Store {
    /// Connect and create any missing tables.
    pub async fn new(db_url: &str) -> Result<Self> {
        Self::with_pool_options(db_url, 5, 1).await
    }

    pub async fn with_pool_options(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self> {
        let store = Self::connect(db_url, max_connections, min_connections).await?;

        migrator::Migrator::up(&store.conn, None)
            .await
            .context("Failed to create database schema")?;

        info!(
            "Database connected & schema ready (pool: {}-{})",
            min_connections, max_connections
        );

        Ok(store)
    }

    /// Connect without touching the schema.
    pub async fn connect(db_url: &str, max_connections: u32, min_connections: u32) -> Result<Self> {
        let path_str = db_url.trim_start_matches("sqlite:");
        if !path_str.starts_with(":memory:") {
            if let Some(parent) = Path::new(path_str).parent() {
                tokio::fs::create_dir_all(parent).await.ok();
            }
            if !Path::new(path_str).exists() {
                std::fs::File::create(path_str)
                    .with_context(|| format!("Failed to create database file: {path_str}"))?;
            }
        }

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .max_lifetime(Duration::from_secs(600))
            .sqlx_logging(false);

        let conn = Database::connect(opt)
            .await
            .with_context(|| format!("Failed to connect to database: {db_url}"))?;

        Ok(Self { conn })
    }

    /// Drop every table and create the schema again.
    pub async fn reset(&self) -> Result<()> {
        migrator::Migrator::fresh(&self.conn)
            .await
            .context("Failed to reset database schema")?;
        info!("Database schema dropped and recreated");
        Ok(())
    }

    /// Create missing tables, leaving existing data alone.
    pub async fn migrate(&self) -> Result<()> {
        migrator::Migrator::up(&self.conn, None)
            .await
            .context("Failed to create database schema")
    }

    fn user_repo(&self) -> repositories::user::UserRepository {
        repositories::user::UserRepository::new(self.conn.clone())
    }

    fn movie_repo(&self) -> repositories::movie::MovieRepository {
        repositories::movie::MovieRepository::new(self.conn.clone())
    }

    pub async fn get_user(&self) -> Result<Option<User>> {
        self.user_repo().get().await
    }

    pub async fn verify_user_credentials(&self, username: &str, password: &str) -> Result<bool> {
        self.user_repo().verify_credentials(username, password).await
    }

    pub async fn upsert_user_credentials(
        &self,
        username: &str,
        password: &str,
        config: &SecurityConfig,
    ) -> Result<bool> {
        self.user_repo()
            .upsert_credentials(username, password, config)
            .await
    }

    pub async fn update_user_name(&self, name: &str) -> Result<User> {
        self.user_repo().update_name(name).await
    }

    pub async fn upsert_user_name(&self, name: &str) -> Result<User> {
        self.user_repo().upsert_name(name).await
    }

    pub async fn list_movies(&self) -> Result<Vec<Movie>> {
        self.movie_repo().list().await
    }

    pub async fn get_movie(&self, id: i32) -> Result<Option<Movie>> {
        self.movie_repo().get(id).await
    }

    pub async fn add_movie(&self, input: &MovieInput) -> Result<Movie> {
        self.movie_repo().add(input).await
    }

    pub async fn add_movies(&self, inputs: &[MovieInput]) -> Result<usize> {
        self.movie_repo().add_many(inputs).await
    }

    pub async fn update_movie(&self, id: i32, input: &MovieInput) -> Result<Option<Movie>> {
        self.movie_repo().update(id, input).await
    }

    pub async fn delete_movie(&self, id: i32) -> Result<bool> {
        self.movie_repo().delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_reset_drops_data() {
        let store = Store::new("sqlite::memory:").await.unwrap();
        store.add_movie(&MovieInput::new("Leon", "1994")).await.unwrap();
        store.upsert_user_name("Grey Li").await.unwrap();

        store.reset().await.unwrap();

        assert!(store.list_movies().await.unwrap().is_empty());
        assert!(store.get_user().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_migrate_is_idempotent() {
        let store = Store::new("sqlite::memory:").await.unwrap();
        store.add_movie(&MovieInput::new("Leon", "1994")).await.unwrap();
        store.migrate().await.unwrap();
        assert_eq!(store.list_movies().await.unwrap().len(), 1);
    }
}
