pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::state::AppState;
use crate::view::handlers;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_body_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/resume/render", post(handlers::handle_render))
        .route("/api/v1/resume/tree", post(handlers::handle_tree))
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app_with(config: Config) -> Router {
        build_router(AppState { config })
    }

    fn app() -> Router {
        app_with(Config::default())
    }

    fn post_json(uri: &str, body: &Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_string(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn resume_body() -> Value {
        json!({
            "information": {
                "basicInfo": { "sectionTitle": "Basic Info", "detail": { "name": "Ada Lovelace", "email": "ada@example.com" } },
                "project": {
                    "sectionTitle": "Projects",
                    "details": [{ "title": "Engine", "link": "https://engine.dev", "points": ["a", "b"] }]
                },
                "achievement": { "details": [{ "title": "Prize" }] }
            },
            "sections": ["basicInfo", "project", "achievement"],
            "activeColor": "#a855f7"
        })
    }

    #[tokio::test]
    async fn test_health() {
        let response = app()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "resume-view");
    }

    #[tokio::test]
    async fn test_render_returns_html_fragment() {
        let response = app()
            .oneshot(post_json("/api/v1/resume/render", &resume_body()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap().to_string();
        assert!(content_type.starts_with("text/html"));

        let html = body_string(response).await;
        assert!(html.starts_with("<div><div class=\"container\" style=\"--color: #a855f7\">"));
        assert!(html.contains("<p class=\"heading\">Ada Lovelace</p>"));
        assert!(html.contains("<a class=\"link\" href=\"https://engine.dev\">"));
        assert!(html.contains("class=\"section hidden\" data-section=\"achievement\""));
        assert!(!html.contains("<!DOCTYPE html>"));
    }

    #[tokio::test]
    async fn test_render_document_mode() {
        let response = app()
            .oneshot(post_json("/api/v1/resume/render?document=true", &resume_body()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Ada Lovelace</title>"));
    }

    #[tokio::test]
    async fn test_tree_carries_item_keys() {
        let response = app()
            .oneshot(post_json("/api/v1/resume/tree", &resume_body()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let tree = body_string(response).await;
        assert!(tree.contains("\"key\":\"Engine0\""));
        assert!(tree.contains("\"key\":\"a0\""));
        assert!(tree.contains("\"key\":\"b1\""));
    }

    #[tokio::test]
    async fn test_default_accent_fills_missing_active_color() {
        let config = Config {
            default_accent_color: Some("#239ce2".to_string()),
            ..Config::default()
        };
        let mut body = resume_body();
        body.as_object_mut().unwrap().remove("activeColor");

        let response = app_with(config)
            .oneshot(post_json("/api/v1/resume/render", &body))
            .await
            .unwrap();
        let html = body_string(response).await;
        assert!(html.contains("style=\"--color: #239ce2\""));
    }

    #[tokio::test]
    async fn test_malformed_body_is_validation_error() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/resume/render")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{\"information\": 42}"))
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_body_over_limit_is_payload_too_large() {
        let config = Config {
            max_body_bytes: 16,
            ..Config::default()
        };
        let response = app_with(config)
            .oneshot(post_json("/api/v1/resume/render", &resume_body()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
        let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["error"]["code"], "PAYLOAD_TOO_LARGE");
    }

    #[tokio::test]
    async fn test_missing_content_type_is_unsupported_media_type() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/resume/tree")
            .body(Body::from(resume_body().to_string()))
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
        let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["error"]["code"], "UNSUPPORTED_MEDIA_TYPE");
    }

    #[tokio::test]
    async fn test_numeric_points_render_instead_of_failing() {
        let body = json!({
            "information": {
                "workExp": {
                    "sectionTitle": "W",
                    "details": [{ "title": "E", "points": [2019, "b"] }]
                }
            },
            "sections": ["workExp"]
        });
        let response = app()
            .oneshot(post_json("/api/v1/resume/render", &body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(html.contains("<li class=\"point\">2019</li><li class=\"point\">b</li>"));
    }

    #[tokio::test]
    async fn test_unknown_route_is_404_json() {
        let response = app()
            .oneshot(Request::get("/api/v1/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }
}
