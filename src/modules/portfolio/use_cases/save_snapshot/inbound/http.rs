use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::modules::portfolio::core::state::SaveStatus;
use crate::modules::portfolio::use_cases::save_snapshot::handler::SaveError;
use crate::modules::portfolio::use_cases::save_snapshot::sync_client::SyncError;
use crate::shell::responses::{error_response, require_session};
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct SaveResponse {
    pub revision: Option<String>,
    pub message: String,
    pub banner: Option<String>,
}

#[derive(Serialize)]
pub struct SaveStatusResponse {
    pub status: SaveStatus,
    pub banner: Option<String>,
}

pub async fn save(State(state): State<AppState>) -> Response {
    match state.save_handler.handle(&state.portfolio).await {
        Ok(ack) => {
            tracing::info!(revision = ?ack.revision, "snapshot committed");
            let banner = state.portfolio.read().await.save_status.banner();
            Json(SaveResponse {
                revision: ack.revision,
                message: ack.message,
                banner,
            })
            .into_response()
        }
        Err(error) => {
            tracing::warn!(%error, "save failed");
            let status = match &error {
                SaveError::NotSignedIn => StatusCode::FORBIDDEN,
                SaveError::SaveInProgress => StatusCode::CONFLICT,
                SaveError::Sync(SyncError::Unauthorized(_)) => StatusCode::UNAUTHORIZED,
                SaveError::Sync(SyncError::Conflict(_)) => StatusCode::CONFLICT,
                SaveError::Sync(SyncError::FetchFailed { .. })
                | SaveError::Sync(SyncError::WriteFailed { .. }) => StatusCode::BAD_GATEWAY,
            };
            error_response(status, error.to_string())
        }
    }
}

pub async fn status(State(state): State<AppState>) -> Response {
    let guard = state.portfolio.read().await;
    if let Err(rejection) = require_session(&guard) {
        return rejection;
    }
    Json(SaveStatusResponse {
        status: guard.save_status.clone(),
        banner: guard.save_status.banner(),
    })
    .into_response()
}
