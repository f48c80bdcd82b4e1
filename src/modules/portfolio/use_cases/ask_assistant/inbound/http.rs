use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::modules::portfolio::core::chat::{ChatMessage, ChatTranscript};
use crate::modules::portfolio::use_cases::ask_assistant::handler::ChatError;
use crate::shell::responses::error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct AskBody {
    pub message: String,
}

#[derive(Serialize)]
pub struct AskResponse {
    pub reply: ChatMessage,
    pub transcript: ChatTranscript,
}

pub async fn transcript(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.chat_handler.transcript().await)
}

pub async fn ask(
    State(state): State<AppState>,
    body: Result<Json<AskBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state.chat_handler.handle(&body.message).await {
        Ok(reply) => Json(AskResponse {
            reply,
            transcript: state.chat_handler.transcript().await,
        })
        .into_response(),
        Err(error @ ChatError::EmptyMessage) => {
            error_response(StatusCode::BAD_REQUEST, error.to_string())
        }
        Err(error @ ChatError::Busy) => error_response(StatusCode::CONFLICT, error.to_string()),
    }
}

#[cfg(test)]
mod ask_assistant_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use http_body_util::BodyExt;
    use rstest::rstest;
    use tower::ServiceExt;

    use crate::modules::portfolio::adapters::outbound::assistant::AssistantError;
    use crate::modules::portfolio::adapters::outbound::assistant_in_memory::ScriptedAssistant;
    use crate::modules::portfolio::core::chat::GREETING;
    use crate::modules::portfolio::use_cases::ask_assistant::handler::FALLBACK_REPLY;
    use crate::shared::infrastructure::file_store::in_memory::InMemoryFileStore;
    use crate::shell::state::AppState;
    use crate::tests::fixtures::app_state::{make_test_app, make_test_app_with};

    use super::{ask, transcript};

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/chat", get(transcript).post(ask))
            .with_state(state)
    }

    fn post_message(message: &str) -> Request<Body> {
        Request::post("/chat")
            .header("content-type", "application/json")
            .body(Body::from(
                serde_json::json!({ "message": message }).to_string(),
            ))
            .unwrap()
    }

    async fn json_of(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_open_with_the_greeting() {
        let response = app(make_test_app().state)
            .oneshot(Request::get("/chat").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = json_of(response).await;
        assert_eq!(json["messages"][0]["role"], "assistant");
        assert_eq!(json["messages"][0]["content"], GREETING);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_the_reply_and_the_grown_transcript() {
        let test = make_test_app_with(
            InMemoryFileStore::new(),
            ScriptedAssistant::answering([Ok("Mostly posters.".to_string())]),
        );

        let response = app(test.state)
            .oneshot(post_message("What do you design?"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = json_of(response).await;
        assert_eq!(json["reply"]["content"], "Mostly posters.");
        assert_eq!(json["transcript"]["messages"].as_array().unwrap().len(), 3);
        assert_eq!(json["transcript"]["messages"][1]["role"], "user");
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_reply_with_the_fallback_when_the_assistant_fails() {
        let test = make_test_app_with(
            InMemoryFileStore::new(),
            ScriptedAssistant::answering([Err(AssistantError::NotConfigured)]),
        );

        let response = app(test.state).oneshot(post_message("hi")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_of(response).await["reply"]["content"], FALLBACK_REPLY);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_400_on_an_empty_message() {
        let test = make_test_app();

        let response = app(test.state.clone())
            .oneshot(post_message("   "))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(test.state.chat_handler.transcript().await.messages().len(), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_409_while_a_reply_is_pending() {
        let test = make_test_app_with(
            InMemoryFileStore::new(),
            ScriptedAssistant::new().with_delay_ms(100),
        );

        let first = tokio::spawn(app(test.state.clone()).oneshot(post_message("first")));
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
        let second = app(test.state.clone())
            .oneshot(post_message("second"))
            .await
            .unwrap();

        assert_eq!(second.status(), StatusCode::CONFLICT);
        assert_eq!(first.await.unwrap().unwrap().status(), StatusCode::OK);
    }
}
