use axum::{
    Router,
    body::Body,
    http::Request,
    middleware,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tower_sessions::cookie::{Key, SameSite};
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};
use tracing::warn;

use crate::config::ServerConfig;
use crate::state::AppState;

pub mod auth;
mod demo;
mod error;
pub mod flash;
mod movies;
mod settings;
pub mod templates;
pub mod urls;

pub use auth::{LOGIN_FAILED_MESSAGE, LOGIN_REQUIRED_MESSAGE};
pub use error::WebError;
pub use movies::INVALID_INPUT_MESSAGE;

const SESSION_COOKIE_NAME: &str = "watchlist_session";

/// Key that signs the session cookie.
fn session_key(server: &ServerConfig) -> anyhow::Result<Key> {
    match &server.secret_key {
        Some(secret) => Key::try_from(secret.as_bytes())
            .map_err(|e| anyhow::anyhow!("Invalid session secret key: {e}")),
        None => {
            warn!("No secret key configured; sessions will not survive a restart");
            Ok(Key::generate())
        }
    }
}

pub fn router(state: Arc<AppState>) -> anyhow::Result<Router> {
    let server = &state.config.server;

    let session_layer = SessionManagerLayer::new(MemoryStore::default())
        .with_name(SESSION_COOKIE_NAME)
        .with_secure(server.secure_cookies)
        .with_http_only(true)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(time::Duration::minutes(
            server.session_expiry_minutes,
        )))
        .with_signed(session_key(server)?);

    let protected_routes = create_protected_router(state.clone());

    let trace_layer = TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
        tracing::info_span!(
            "request",
            method = %request.method(),
            uri = %request.uri(),
            user = tracing::field::Empty,
        )
    });

    Ok(Router::new()
        .route("/", get(movies::index).post(movies::create))
        .route("/login", get(auth::login_form).post(auth::login))
        .route("/user/{name}", get(demo::user_page))
        .route("/test", get(demo::test_url_for))
        .merge(protected_routes)
        .fallback(error::not_found)
        .layer(session_layer)
        .layer(trace_layer)
        .with_state(state))
}

fn create_protected_router(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route("/logout", get(auth::logout))
        .route("/settings", get(settings::show).post(settings::update))
        .route(
            "/movie/edit/{id}",
            get(movies::edit_form).post(movies::update),
        )
        .route("/movie/delete/{id}", post(movies::delete))
        .route_layer(middleware::from_fn_with_state(
            state,
            auth::require_authenticated,
        ))
}
