use crate::modules::portfolio::core::session::Session;
use crate::modules::portfolio::core::state::PortfolioState;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorBody {
            error: message.into(),
        }),
    )
        .into_response()
}

/// Admin routes are reachable only while a session exists.
pub fn require_session(state: &PortfolioState) -> Result<&Session, Response> {
    state
        .session
        .as_ref()
        .ok_or_else(|| error_response(StatusCode::UNAUTHORIZED, "sign in first"))
}
