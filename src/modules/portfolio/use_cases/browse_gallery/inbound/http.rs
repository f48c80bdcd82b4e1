use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::modules::portfolio::core::gallery::{self, GalleryView};
use crate::shell::responses::error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct GalleryParams {
    pub category: Option<String>,
}

pub async fn gallery(
    State(state): State<AppState>,
    Query(params): Query<GalleryParams>,
) -> impl IntoResponse {
    let guard = state.portfolio.read().await;
    Json(GalleryView::build(
        guard.store.projects(),
        params.category.as_deref(),
    ))
}

pub async fn project(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let guard = state.portfolio.read().await;
    match guard.store.get(&id) {
        Some(project) => Json(project.clone()).into_response(),
        None => error_response(StatusCode::NOT_FOUND, format!("project {id} not found")),
    }
}

pub async fn categories(State(state): State<AppState>) -> impl IntoResponse {
    let guard = state.portfolio.read().await;
    Json(gallery::categories(guard.store.projects()))
}

#[cfg(test)]
mod browse_gallery_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use http_body_util::BodyExt;
    use rstest::rstest;
    use tower::ServiceExt;

    use crate::shell::state::AppState;
    use crate::tests::fixtures::app_state::make_test_app;

    use super::{categories, gallery, project};

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/gallery", get(gallery))
            .route("/gallery/{id}", get(project))
            .route("/categories", get(categories))
            .with_state(state)
    }

    async fn get_json(state: AppState, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app(state)
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_show_every_project_under_all() {
        let (status, json) = get_json(make_test_app().state, "/gallery").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["activeCategory"], "All");
        assert_eq!(json["projects"].as_array().unwrap().len(), 2);
        assert_eq!(
            json["categories"],
            serde_json::json!(["All", "Logo Design", "Poster Design"])
        );
    }

    #[rstest]
    #[case("Logo%20Design", 1)]
    #[case("Motion", 0)]
    #[tokio::test]
    async fn it_should_filter_by_category(#[case] category: &str, #[case] expected: usize) {
        let (status, json) =
            get_json(make_test_app().state, &format!("/gallery?category={category}")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["projects"].as_array().unwrap().len(), expected);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_a_single_project_for_the_detail_view() {
        let (status, json) = get_json(make_test_app().state, "/gallery/p-poster").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["category"], "Poster Design");
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_404_for_an_unknown_project() {
        let (status, json) = get_json(make_test_app().state, "/gallery/missing").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"], "project missing not found");
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_list_categories_without_a_session() {
        let (status, json) = get_json(make_test_app().state, "/categories").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json[0], "All");
    }
}
