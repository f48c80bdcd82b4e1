use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::modules::portfolio::use_cases::revert_to_remote::handler::{
    RevertError, revert_to_remote,
};
use crate::shell::responses::error_response;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct ReloadResponse {
    pub count: usize,
    pub revision: Option<String>,
}

pub async fn reload(State(state): State<AppState>) -> Response {
    match revert_to_remote(state.sync_client.as_ref(), &state.portfolio).await {
        Ok(reverted) => Json(ReloadResponse {
            count: reverted.count,
            revision: reverted.revision,
        })
        .into_response(),
        Err(RevertError::NotSignedIn) => {
            error_response(StatusCode::UNAUTHORIZED, "sign in first")
        }
        Err(error @ RevertError::Sync(_)) => {
            tracing::warn!(%error, "reload failed");
            error_response(StatusCode::BAD_GATEWAY, error.to_string())
        }
    }
}

#[cfg(test)]
mod revert_to_remote_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::post,
    };
    use http_body_util::BodyExt;
    use rstest::rstest;
    use tower::ServiceExt;

    use crate::shell::state::AppState;
    use crate::tests::fixtures::app_state::{make_test_app, sign_in};

    use super::reload;

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/admin/reload", post(reload))
            .with_state(state)
    }

    fn request() -> Request<Body> {
        Request::post("/admin/reload").body(Body::empty()).unwrap()
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_401_without_a_session() {
        let response = app(make_test_app().state).oneshot(request()).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_empty_the_store_when_nothing_is_published_yet() {
        let test = make_test_app();
        sign_in(&test.state).await;

        let response = app(test.state.clone()).oneshot(request()).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["count"], 0);
        assert!(json["revision"].is_null());
        assert!(test.state.portfolio.read().await.store.is_empty());
    }
}
