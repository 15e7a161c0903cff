//! Top-level HTTP router.
//!
//! # Route Structure
//!
//! - `POST /create`            - Create (or reuse) a short link
//! - `GET  /get/{short_link}`  - Resolve a short link
//! - `GET  /health`            - Storage health check
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Panic recovery** - Handler panics become 500 responses
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{panic, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .merge(api::routes::link_routes())
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(panic::layer())
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::LinkService;
    use crate::infrastructure::persistence::InMemoryLinkRepository;
    use crate::utils::code_generator::Sha256CodeGenerator;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn state() -> AppState {
        let service = LinkService::new(
            Arc::new(InMemoryLinkRepository::new()),
            Arc::new(Sha256CodeGenerator::from_os_rng()),
        );
        AppState::new(Arc::new(service), "in_memory")
    }

    #[tokio::test]
    async fn test_trailing_slash_is_normalized() {
        let app = app_router(state());

        let response = app
            .oneshot(Request::get("/health/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_create_then_get_through_full_router() {
        let app = app_router(state());

        let response = app
            .clone()
            .oneshot(
                Request::post("/create")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"original_link":"https://www.golang.org"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        let short_link = json["body"]["short_link"].as_str().unwrap().to_string();

        let response = app
            .oneshot(
                Request::get(format!("/get/{short_link}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["body"]["original_link"], "https://www.golang.org");
    }
}
