//! Domain primitives shared by the services and the web layer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a Movie record.
///
/// # Examples
///
/// ```rust
/// use watchlist::domain::MovieId;
///
/// let id = MovieId::new(42);
/// assert_eq!(id.value(), 42);
/// assert_eq!(id.to_string(), "42");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(i32);

impl MovieId {
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn value(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Proof that the current request belongs to the logged-in user.
///
/// Only a successful login mints one, and the web layer re-reads it from the
/// session on every request. Operations that mutate the store take it by
/// reference so they cannot be called anonymously.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    user_id: i32,
    username: String,
}

impl Identity {
    pub(crate) fn new(user_id: i32, username: impl Into<String>) -> Self {
        Self {
            user_id,
            username: username.into(),
        }
    }

    #[must_use]
    pub const fn user_id(&self) -> i32 {
        self.user_id
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }
}
