use axum::{
    Json,
    body::Bytes,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::modules::portfolio::core::embedded_image::{self, ImageError};
use crate::modules::portfolio::core::project::{Project, ProjectDraft, ProjectPatch};
use crate::modules::portfolio::core::store::StoreError;
use crate::shell::responses::{error_response, require_session};
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct ProjectListResponse {
    pub count: usize,
    pub projects: Vec<Project>,
}

#[derive(Deserialize)]
pub struct RemoveParams {
    #[serde(default)]
    pub confirm: bool,
}

pub async fn list(State(state): State<AppState>) -> Response {
    let guard = state.portfolio.read().await;
    if let Err(rejection) = require_session(&guard) {
        return rejection;
    }
    Json(ProjectListResponse {
        count: guard.store.len(),
        projects: guard.store.projects().to_vec(),
    })
    .into_response()
}

pub async fn add(
    State(state): State<AppState>,
    body: Result<Json<ProjectDraft>, JsonRejection>,
) -> Response {
    let Json(draft) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let mut guard = state.portfolio.write().await;
    if let Err(rejection) = require_session(&guard) {
        return rejection;
    }
    if let Err(error) = check_image_reference(draft.image_url.as_deref(), state.max_image_bytes) {
        return store_error(error);
    }
    let project = guard.store.add(draft, state.clock.now().year());
    tracing::info!(id = %project.id, "project added");
    (StatusCode::CREATED, Json(project)).into_response()
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<ProjectPatch>, JsonRejection>,
) -> Response {
    let Json(patch) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let mut guard = state.portfolio.write().await;
    if let Err(rejection) = require_session(&guard) {
        return rejection;
    }
    if let Err(error) = check_image_reference(patch.image_url.as_deref(), state.max_image_bytes) {
        return store_error(error);
    }
    match guard.store.update(&id, patch) {
        Ok(project) => Json(project).into_response(),
        Err(error) => store_error(error),
    }
}

/// Removal is destructive and only happens with `?confirm=true`; an unconfirmed
/// request leaves the store as it was.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<RemoveParams>,
) -> Response {
    let mut guard = state.portfolio.write().await;
    if let Err(rejection) = require_session(&guard) {
        return rejection;
    }
    if !params.confirm {
        return error_response(StatusCode::BAD_REQUEST, "Delete this project?");
    }
    match guard.store.remove(&id) {
        Ok(project) => {
            tracing::info!(id = %project.id, "project removed");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(error) => store_error(error),
    }
}

pub async fn attach_image(
    State(state): State<AppState>,
    Path(id): Path<String>,
    bytes: Bytes,
) -> Response {
    let mut guard = state.portfolio.write().await;
    if let Err(rejection) = require_session(&guard) {
        return rejection;
    }
    match guard.store.attach_image(&id, &bytes, state.max_image_bytes) {
        Ok(project) => {
            tracing::info!(id = %project.id, size = bytes.len(), "image attached");
            Json(project).into_response()
        }
        Err(error) => store_error(error),
    }
}

/// Inline images set through the JSON routes obey the upload cap too.
fn check_image_reference(url: Option<&str>, max_encoded_bytes: usize) -> Result<(), StoreError> {
    match url {
        Some(url) => Ok(embedded_image::check_reference(url, max_encoded_bytes)?),
        None => Ok(()),
    }
}

fn store_error(error: StoreError) -> Response {
    let status = match &error {
        StoreError::NotFound(_) => StatusCode::NOT_FOUND,
        StoreError::InvalidImage(ImageError::TooLarge { .. }) => StatusCode::PAYLOAD_TOO_LARGE,
        StoreError::InvalidImage(ImageError::UnrecognizedFormat) => {
            StatusCode::UNSUPPORTED_MEDIA_TYPE
        }
        StoreError::InvalidImage(ImageError::Empty) => StatusCode::BAD_REQUEST,
    };
    error_response(status, error.to_string())
}
