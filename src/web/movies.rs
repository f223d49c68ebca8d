use axum::{
    Form,
    extract::{FromRequestParts, Path, State, rejection::FormRejection},
    http::request::Parts,
    response::{Html, Redirect},
};
use std::sync::Arc;
use tower_sessions::Session;

use super::auth::form_or_default;
use super::error::WebError;
use super::flash::Flash;
use super::templates::{EditTemplate, IndexTemplate, Layout, render};
use super::urls;
use crate::domain::{Identity, MovieId};
use crate::models::movie::MovieInput;
use crate::services::MovieError;
use crate::state::AppState;

pub const INVALID_INPUT_MESSAGE: &str = "Invalid input.";

/// Ids that do not parse as integers are reported as missing pages.
impl<S> FromRequestParts<S> for MovieId
where
    S: Send + Sync,
{
    type Rejection = WebError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| WebError::NotFound("movie".to_string()))?;

        raw.parse::<i32>()
            .map(MovieId::new)
            .map_err(|_| WebError::not_found("Movie", raw))
    }
}

/// GET /
pub async fn index(
    State(state): State<Arc<AppState>>,
    session: Session,
) -> Result<Html<String>, WebError> {
    let movies = state.movie_service.list().await?;
    let layout = Layout::load(&state, &session).await?;
    render(&IndexTemplate::new(layout, movies))
}

/// POST /
pub async fn create(
    State(state): State<Arc<AppState>>,
    identity: Identity,
    flash: Flash,
    form: Result<Form<MovieInput>, FormRejection>,
) -> Result<Redirect, WebError> {
    let input = form_or_default(form);
    match state.movie_service.create(&identity, input).await {
        Ok(_) => flash.push("Item created.").await?,
        Err(MovieError::Validation(_)) => flash.push(INVALID_INPUT_MESSAGE).await?,
        Err(e) => return Err(e.into()),
    }

    Ok(Redirect::to(&urls::index()))
}

/// GET /movie/edit/{id}
pub async fn edit_form(
    State(state): State<Arc<AppState>>,
    id: MovieId,
    session: Session,
) -> Result<Html<String>, WebError> {
    let movie = state.movie_service.get(id).await?;
    let layout = Layout::load(&state, &session).await?;
    render(&EditTemplate { layout, movie })
}

/// POST /movie/edit/{id}
pub async fn update(
    State(state): State<Arc<AppState>>,
    identity: Identity,
    id: MovieId,
    flash: Flash,
    form: Result<Form<MovieInput>, FormRejection>,
) -> Result<Redirect, WebError> {
    let input = form_or_default(form);
    match state.movie_service.update(&identity, id, input).await {
        Ok(_) => {
            flash.push("Item updated.").await?;
            Ok(Redirect::to(&urls::index()))
        }
        Err(MovieError::Validation(_)) => {
            flash.push(INVALID_INPUT_MESSAGE).await?;
            Ok(Redirect::to(&urls::edit(id)))
        }
        Err(e) => Err(e.into()),
    }
}

/// POST /movie/delete/{id}
pub async fn delete(
    State(state): State<Arc<AppState>>,
    identity: Identity,
    id: MovieId,
    flash: Flash,
) -> Result<Redirect, WebError> {
    state.movie_service.delete(&identity, id).await?;
    flash.push("Item deleted.").await?;
    Ok(Redirect::to(&urls::index()))
}
