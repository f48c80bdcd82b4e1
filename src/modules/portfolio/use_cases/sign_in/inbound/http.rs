use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;

use crate::modules::portfolio::use_cases::sign_in::command::SignIn;
use crate::modules::portfolio::use_cases::sign_in::decide::authenticate;
use crate::shell::responses::error_response;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct SessionResponse {
    pub username: String,
}

pub async fn sign_in(
    State(state): State<AppState>,
    body: Result<Json<SignIn>, JsonRejection>,
) -> impl IntoResponse {
    let Json(command) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match authenticate(&state.operator, command) {
        Ok(session) => {
            tracing::info!(username = %session.username, "operator signed in");
            let username = session.username.clone();
            state.portfolio.write().await.begin_session(session);
            Json(SessionResponse { username }).into_response()
        }
        Err(error) => {
            tracing::warn!(%error, "sign-in rejected");
            error_response(StatusCode::UNAUTHORIZED, error.to_string())
        }
    }
}

pub async fn sign_out(State(state): State<AppState>) -> impl IntoResponse {
    if let Some(session) = state.portfolio.write().await.end_session() {
        tracing::info!(username = %session.username, "operator signed out");
    }
    StatusCode::NO_CONTENT
}
