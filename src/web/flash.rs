//! One-shot status messages carried in the session until the next page render.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use tower_sessions::Session;

use super::error::WebError;

const FLASH_KEY: &str = "_flashes";

pub struct Flash {
    session: Session,
}

impl Flash {
    #[must_use]
    pub const fn new(session: Session) -> Self {
        Self { session }
    }

    /// Queue a message for the next rendered page.
    pub async fn push(&self, message: impl Into<String>) -> Result<(), WebError> {
        let mut messages: Vec<String> = self.session.get(FLASH_KEY).await?.unwrap_or_default();
        messages.push(message.into());
        self.session.insert(FLASH_KEY, messages).await?;
        Ok(())
    }

    /// Remove and return every queued message.
    pub async fn take(&self) -> Result<Vec<String>, WebError> {
        Ok(self
            .session
            .remove::<Vec<String>>(FLASH_KEY)
            .await?
            .unwrap_or_default())
    }
}

impl<S> FromRequestParts<S> for Flash
where
    S: Send + Sync,
{
    type Rejection = <Session as FromRequestParts<S>>::Rejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state).await?;
        Ok(Self::new(session))
    }
}
