use axum::{
    Form,
    extract::{FromRequestParts, Request, State, rejection::FormRejection},
    http::request::Parts,
    middleware::Next,
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use std::sync::Arc;
use tower_sessions::Session;

use super::error::WebError;
use super::flash::Flash;
use super::templates::{Layout, LoginTemplate, render};
use super::urls;
use crate::domain::Identity;
use crate::services::AuthError;
use crate::state::AppState;

const IDENTITY_KEY: &str = "identity";

pub const LOGIN_REQUIRED_MESSAGE: &str = "Please log in to access this page.";
pub const LOGIN_FAILED_MESSAGE: &str = "Invalid username or password.";

#[derive(Default, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Read the identity stored in the session and make sure it still matches the
/// account. A stale identity is dropped from the session.
pub async fn current_identity(
    state: &AppState,
    session: &Session,
) -> Result<Option<Identity>, WebError> {
    let Some(identity) = session.get::<Identity>(IDENTITY_KEY).await? else {
        return Ok(None);
    };

    if state.auth_service.is_current(&identity).await? {
        Ok(Some(identity))
    } else {
        session.remove::<Identity>(IDENTITY_KEY).await?;
        Ok(None)
    }
}

async fn login_redirect(session: Session) -> Result<Response, WebError> {
    Flash::new(session).push(LOGIN_REQUIRED_MESSAGE).await?;
    Ok(Redirect::to(&urls::login()).into_response())
}

// ============================================================================
// Guard
// ============================================================================

/// Redirects anonymous callers to the login page. On success the identity is
/// stored in the request extensions for the handler's [`Identity`] extractor.
pub async fn require_authenticated(
    State(state): State<Arc<AppState>>,
    session: Session,
    mut request: Request,
    next: Next,
) -> Result<Response, WebError> {
    match current_identity(&state, &session).await? {
        Some(identity) => {
            tracing::Span::current().record("user", identity.username());
            request.extensions_mut().insert(identity);
            Ok(next.run(request).await)
        }
        None => login_redirect(session).await,
    }
}

impl FromRequestParts<Arc<AppState>> for Identity {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        if let Some(identity) = parts.extensions.get::<Identity>() {
            return Ok(identity.clone());
        }

        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(IntoResponse::into_response)?;

        match current_identity(state, &session).await {
            Ok(Some(identity)) => {
                tracing::Span::current().record("user", identity.username());
                Ok(identity)
            }
            Ok(None) => Err(login_redirect(session)
                .await
                .unwrap_or_else(IntoResponse::into_response)),
            Err(e) => Err(e.into_response()),
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// An unreadable form body is treated like an empty submission, so it takes
/// the same failure path as missing fields.
pub(super) fn form_or_default<T: Default>(form: Result<Form<T>, FormRejection>) -> T {
    match form {
        Ok(Form(value)) => value,
        Err(rejection) => {
            tracing::debug!(%rejection, "Unreadable form body");
            T::default()
        }
    }
}

/// GET /login
pub async fn login_form(
    State(state): State<Arc<AppState>>,
    session: Session,
) -> Result<Html<String>, WebError> {
    let layout = Layout::load(&state, &session).await?;
    render(&LoginTemplate { layout })
}

/// POST /login
pub async fn login(
    State(state): State<Arc<AppState>>,
    session: Session,
    form: Result<Form<LoginForm>, FormRejection>,
) -> Result<Redirect, WebError> {
    let flash = Flash::new(session.clone());
    let form = form_or_default(form);

    match state
        .auth_service
        .login(&form.username, &form.password)
        .await
    {
        Ok(identity) => {
            session.cycle_id().await?;
            session.insert(IDENTITY_KEY, &identity).await?;
            flash.push("Login success.").await?;
            tracing::info!(user = identity.username(), "Login succeeded");
            Ok(Redirect::to(&urls::index()))
        }
        Err(AuthError::InvalidCredentials) => {
            tracing::warn!(username = %form.username, "Login failed");
            flash.push(LOGIN_FAILED_MESSAGE).await?;
            Ok(Redirect::to(&urls::login()))
        }
        Err(e) => Err(e.into()),
    }
}

/// GET /logout
pub async fn logout(identity: Identity, session: Session) -> Result<Redirect, WebError> {
    session.remove::<Identity>(IDENTITY_KEY).await?;
    session.cycle_id().await?;
    Flash::new(session).push("Goodbye.").await?;
    tracing::info!(user = identity.username(), "Logged out");
    Ok(Redirect::to(&urls::index()))
}
