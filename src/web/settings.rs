use axum::{
    Form,
    extract::{State, rejection::FormRejection},
    response::{Html, Redirect},
};
use serde::Deserialize;
use std::sync::Arc;
use tower_sessions::Session;

use super::auth::form_or_default;
use super::error::WebError;
use super::flash::Flash;
use super::movies::INVALID_INPUT_MESSAGE;
use super::templates::{Layout, SettingsTemplate, render};
use super::urls;
use crate::domain::Identity;
use crate::services::UserError;
use crate::state::AppState;

#[derive(Default, Deserialize)]
pub struct SettingsForm {
    #[serde(default)]
    pub name: String,
}

/// GET /settings
pub async fn show(
    State(state): State<Arc<AppState>>,
    session: Session,
) -> Result<Html<String>, WebError> {
    let name = state
        .user_service
        .current()
        .await?
        .map(|u| u.name)
        .unwrap_or_default();
    let layout = Layout::load(&state, &session).await?;
    render(&SettingsTemplate { layout, name })
}

/// POST /settings
pub async fn update(
    State(state): State<Arc<AppState>>,
    identity: Identity,
    flash: Flash,
    form: Result<Form<SettingsForm>, FormRejection>,
) -> Result<Redirect, WebError> {
    let form = form_or_default(form);
    match state.user_service.rename(&identity, &form.name).await {
        Ok(_) => {
            flash.push("Settings updated.").await?;
            Ok(Redirect::to(&urls::index()))
        }
        Err(UserError::Validation(_)) => {
            flash.push(INVALID_INPUT_MESSAGE).await?;
            Ok(Redirect::to(&urls::settings()))
        }
        Err(e) => Err(e.into()),
    }
}
