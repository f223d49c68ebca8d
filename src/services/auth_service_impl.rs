//! `SeaORM` implementation of the `AuthService` trait.

use crate::db::Store;
use crate::domain::Identity;
use crate::services::auth_service::{AuthError, AuthService};
use crate::services::validation::validate_credentials;
use async_trait::async_trait;

pub struct SeaOrmAuthService {
    store: Store,
}

impl SeaOrmAuthService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl AuthService for SeaOrmAuthService {
    async fn login(&self, username: &str, password: &str) -> Result<Identity, AuthError> {
        if validate_credentials(username, password).is_err() {
            return Err(AuthError::InvalidCredentials);
        }

        let is_valid = self
            .store
            .verify_user_credentials(username, password)
            .await?;

        if !is_valid {
            return Err(AuthError::InvalidCredentials);
        }

        let user = self
            .store
            .get_user()
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        Ok(Identity::new(user.id, user.username))
    }

    async fn is_current(&self, identity: &Identity) -> Result<bool, AuthError> {
        let user = self.store.get_user().await?;

        Ok(user.is_some_and(|u| {
            u.has_password && u.id == identity.user_id() && u.username == identity.username()
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SecurityConfig;

    async fn service_with_admin() -> SeaOrmAuthService {
        let store = Store::new("sqlite::memory:").await.unwrap();
        let security = SecurityConfig {
            argon2_memory_cost_kib: 1024,
            argon2_time_cost: 1,
            argon2_parallelism: 1,
        };
        store
            .upsert_user_credentials("admin", "secret", &security)
            .await
            .unwrap();
        SeaOrmAuthService::new(store)
    }

    #[tokio::test]
    async fn test_login_success() {
        let service = service_with_admin().await;
        let identity = service.login("admin", "secret").await.unwrap();
        assert_eq!(identity.username(), "admin");
        assert!(service.is_current(&identity).await.unwrap());
    }

    #[tokio::test]
    async fn test_login_failures_are_uniform() {
        let service = service_with_admin().await;

        for (username, password) in [
            ("admin", "wrong"),
            ("nobody", "secret"),
            ("", "secret"),
            ("admin", ""),
        ] {
            let err = service.login(username, password).await.unwrap_err();
            assert!(matches!(err, AuthError::InvalidCredentials));
            assert_eq!(err.to_string(), "Invalid username or password");
        }
    }

    #[tokio::test]
    async fn test_login_without_account() {
        let store = Store::new("sqlite::memory:").await.unwrap();
        store.upsert_user_name("Grey Li").await.unwrap();
        let service = SeaOrmAuthService::new(store);

        assert!(matches!(
            service.login("admin", "secret").await,
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[tokio::test]
    async fn test_identity_goes_stale_after_username_change() {
        let service = service_with_admin().await;
        let identity = service.login("admin", "secret").await.unwrap();

        let security = SecurityConfig {
            argon2_memory_cost_kib: 1024,
            argon2_time_cost: 1,
            argon2_parallelism: 1,
        };
        service
            .store
            .upsert_user_credentials("root", "secret", &security)
            .await
            .unwrap();

        assert!(!service.is_current(&identity).await.unwrap());
    }
}
