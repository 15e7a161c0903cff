mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use link_shortener::api::handlers::health_handler;

#[tokio::test]
async fn test_health_endpoint_success() {
    let (state, _repo) = common::create_test_state();
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(json["checks"]["storage"]["status"], "ok");
    assert_eq!(json["checks"]["storage"]["message"], "Backend: in_memory");
}

#[tokio::test]
async fn test_health_endpoint_degraded() {
    let state = common::create_failing_state();
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status(axum::http::StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["storage"]["status"], "error");
}
