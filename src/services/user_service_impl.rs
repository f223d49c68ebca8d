//! `SeaORM` implementation of the `UserService` trait.

use async_trait::async_trait;
use tracing::info;

use crate::db::Store;
use crate::domain::Identity;
use crate::models::user::User;
use crate::services::user_service::{UserError, UserService};
use crate::services::validation::validate_display_name;

pub struct SeaOrmUserService {
    store: Store,
}

impl SeaOrmUserService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UserService for SeaOrmUserService {
    async fn current(&self) -> Result<Option<User>, UserError> {
        Ok(self.store.get_user().await?)
    }

    async fn rename(&self, identity: &Identity, name: &str) -> Result<User, UserError> {
        validate_display_name(name)?;

        if self.store.get_user().await?.is_none() {
            return Err(UserError::NotFound);
        }

        let user = self.store.update_user_name(name).await?;
        info!(user = identity.username(), "Display name updated");
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::validation::ValidationError;

    #[tokio::test]
    async fn test_rename() {
        let store = Store::new("sqlite::memory:").await.unwrap();
        store.upsert_user_name("Admin").await.unwrap();
        let service = SeaOrmUserService::new(store);
        let identity = Identity::new(1, "admin");

        let user = service.rename(&identity, "Grey Li").await.unwrap();
        assert_eq!(user.name, "Grey Li");

        let err = service.rename(&identity, "").await.unwrap_err();
        assert!(matches!(err, UserError::Validation(ValidationError::EmptyName)));

        let err = service
            .rename(&identity, &"n".repeat(21))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            UserError::Validation(ValidationError::NameTooLong)
        ));

        let current = service.current().await.unwrap().unwrap();
        assert_eq!(current.name, "Grey Li");
    }

    #[tokio::test]
    async fn test_rename_without_account() {
        let service = SeaOrmUserService::new(Store::new("sqlite::memory:").await.unwrap());
        let identity = Identity::new(1, "admin");
        assert!(matches!(
            service.rename(&identity, "Grey Li").await,
            Err(UserError::NotFound)
        ));
        assert!(service.current().await.unwrap().is_none());
    }
}
