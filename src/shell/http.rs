use axum::{
    Extension, Router,
    extract::DefaultBodyLimit,
    http::HeaderValue,
    routing::{get, post, put},
};
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::modules::portfolio::use_cases::ask_assistant::inbound::http as chat_http;
use crate::modules::portfolio::use_cases::browse_gallery::inbound::http as gallery_http;
use crate::modules::portfolio::use_cases::manage_projects::inbound::http as projects_http;
use crate::modules::portfolio::use_cases::revert_to_remote::inbound::http as reload_http;
use crate::modules::portfolio::use_cases::save_snapshot::inbound::http as save_http;
use crate::modules::portfolio::use_cases::sign_in::inbound::http as session_http;
use crate::shell::graphql::{build_schema, graphiql, graphql};
use crate::shell::state::AppState;

// Room for an image at the configured cap before it is base64-encoded.
const BODY_LIMIT_HEADROOM: usize = 64 * 1024;

pub fn router(state: AppState, cors_origins: &[String]) -> Router {
    let body_limit = state.max_image_bytes + BODY_LIMIT_HEADROOM;
    let schema = build_schema(state.clone());

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/gallery", get(gallery_http::gallery))
        .route("/gallery/{id}", get(gallery_http::project))
        .route("/categories", get(gallery_http::categories))
        .route("/gql", get(graphiql).post(graphql))
        .route(
            "/session",
            post(session_http::sign_in).delete(session_http::sign_out),
        )
        .route(
            "/admin/projects",
            get(projects_http::list).post(projects_http::add),
        )
        .route(
            "/admin/projects/{id}",
            axum::routing::patch(projects_http::update).delete(projects_http::remove),
        )
        .route("/admin/projects/{id}/image", put(projects_http::attach_image))
        .route("/admin/save", post(save_http::save).get(save_http::status))
        .route("/admin/reload", post(reload_http::reload))
        .route("/chat", get(chat_http::transcript).post(chat_http::ask))
        .layer(Extension(schema))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(cors(cors_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
}
