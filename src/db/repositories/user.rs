use anyhow::{Context, Result};
use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use tokio::task;

use crate::config::SecurityConfig;
use crate::entities::users::{self, SOLE_USER_ID};
use crate::models::user::User;

/// Display name given to an account created by the `admin` command.
const DEFAULT_ADMIN_NAME: &str = "Admin";

pub struct UserRepository {
    conn: DatabaseConnection,
}

impl UserRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    async fn find(&self) -> Result<Option<users::Model>> {
        users::Entity::find_by_id(SOLE_USER_ID)
            .one(&self.conn)
            .await
            .context("Failed to query user")
    }

    /// Get the sole user, if one has been created
    pub async fn get(&self) -> Result<Option<User>> {
        Ok(self.find().await?.map(User::from))
    }

    /// Check a username/password pair against the stored account.
    /// Note: This uses `spawn_blocking` because Argon2 hashing is CPU-intensive
    /// and would block the async runtime if run directly.
    pub async fn verify_credentials(&self, username: &str, password: &str) -> Result<bool> {
        let Some(user) = self.find().await? else {
            return Ok(false);
        };

        let Some(password_hash) = user.password_hash else {
            return Ok(false);
        };

        if user.username != username {
            return Ok(false);
        }

        let password = password.to_string();

        let is_valid = task::spawn_blocking(move || {
            let parsed_hash = PasswordHash::new(&password_hash)
                .map_err(|e| anyhow::anyhow!("Invalid password hash format: {e}"))?;

            Ok::<bool, anyhow::Error>(
                Argon2::default()
                    .verify_password(password.as_bytes(), &parsed_hash)
                    .is_ok(),
            )
        })
        .await
        .context("Password verification task panicked")??;

        Ok(is_valid)
    }

    /// Create the account or replace its credentials. Returns `true` when a
    /// new record was inserted.
    pub async fn upsert_credentials(
        &self,
        username: &str,
        password: &str,
        config: &SecurityConfig,
    ) -> Result<bool> {
        let password = password.to_string();
        let config = config.clone();
        let password_hash = task::spawn_blocking(move || hash_password(&password, Some(&config)))
            .await
            .context("Password hashing task panicked")??;

        match self.find().await? {
            Some(user) => {
                let mut active: users::ActiveModel = user.into();
                active.username = Set(username.to_string());
                active.password_hash = Set(Some(password_hash));
                active
                    .update(&self.conn)
                    .await
                    .context("Failed to update user credentials")?;
                Ok(false)
            }
            None => {
                let active = users::ActiveModel {
                    id: Set(SOLE_USER_ID),
                    name: Set(DEFAULT_ADMIN_NAME.to_string()),
                    username: Set(username.to_string()),
                    password_hash: Set(Some(password_hash)),
                };
                users::Entity::insert(active)
                    .exec(&self.conn)
                    .await
                    .context("Failed to create user")?;
                Ok(true)
            }
        }
    }

    /// Change the display name of the existing account
    pub async fn update_name(&self, name: &str) -> Result<User> {
        let user = self
            .find()
            .await?
            .ok_or_else(|| anyhow::anyhow!("User not found"))?;

        let mut active: users::ActiveModel = user.into();
        active.name = Set(name.to_string());
        let updated = active
            .update(&self.conn)
            .await
            .context("Failed to update user name")?;

        Ok(User::from(updated))
    }

    /// Set the display name, creating an account without credentials when
    /// none exists yet.
    pub async fn upsert_name(&self, name: &str) -> Result<User> {
        if self.find().await?.is_some() {
            return self.update_name(name).await;
        }

        let active = users::ActiveModel {
            id: Set(SOLE_USER_ID),
            name: Set(name.to_string()),
            username: Set(String::new()),
            password_hash: Set(None),
        };
        let created = active
            .insert(&self.conn)
            .await
            .context("Failed to create user")?;

        Ok(User::from(created))
    }
}

/// Hash a password using Argon2id with optional custom params.
/// If config is None, uses the argon2 crate defaults.
pub fn hash_password(password: &str, config: Option<&SecurityConfig>) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);

    let argon2 = if let Some(cfg) = config {
        let params = Params::new(
            cfg.argon2_memory_cost_kib,
            cfg.argon2_time_cost,
            cfg.argon2_parallelism,
            None,
        )
        .map_err(|e| anyhow::anyhow!("Invalid Argon2 params: {e}"))?;
        Argon2::new(Algorithm::Argon2id, Version::V0x13, params)
    } else {
        Argon2::default()
    };

    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!("Failed to hash password: {e}"))?;

    Ok(hash.to_string())
}
