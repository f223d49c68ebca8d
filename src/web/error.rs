use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use std::fmt;

use super::templates::{ErrorTemplate, render};
use crate::services::{AuthError, MovieError, UserError};

#[derive(Debug)]
pub enum WebError {
    NotFound(String),

    InternalError(String),
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WebError::NotFound(msg) => write!(f, "Not found: {}", msg),
            WebError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for WebError {}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status, page) = match &self {
            WebError::NotFound(msg) => {
                tracing::debug!("Not found: {}", msg);
                (StatusCode::NOT_FOUND, ErrorTemplate::not_found())
            }
            WebError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorTemplate::internal())
            }
        };

        match render(&page) {
            Ok(body) => (status, body).into_response(),
            Err(_) => (status, Html(page.title.to_string())).into_response(),
        }
    }
}

impl WebError {
    pub fn not_found(resource: &str, id: impl fmt::Display) -> Self {
        WebError::NotFound(format!("{} {} not found", resource, id))
    }
}

impl From<anyhow::Error> for WebError {
    fn from(err: anyhow::Error) -> Self {
        WebError::InternalError(format!("{err:#}"))
    }
}

impl From<tower_sessions::session::Error> for WebError {
    fn from(err: tower_sessions::session::Error) -> Self {
        WebError::InternalError(format!("Session error: {err}"))
    }
}

impl From<askama::Error> for WebError {
    fn from(err: askama::Error) -> Self {
        WebError::InternalError(format!("Template error: {err}"))
    }
}

impl From<MovieError> for WebError {
    fn from(err: MovieError) -> Self {
        match err {
            MovieError::NotFound(id) => WebError::not_found("Movie", id),
            other => WebError::InternalError(other.to_string()),
        }
    }
}

impl From<UserError> for WebError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound => WebError::NotFound("User not found".to_string()),
            other => WebError::InternalError(other.to_string()),
        }
    }
}

impl From<AuthError> for WebError {
    fn from(err: AuthError) -> Self {
        WebError::InternalError(err.to_string())
    }
}

/// Fallback for unmatched routes
pub async fn not_found() -> WebError {
    WebError::NotFound("page".to_string())
}
