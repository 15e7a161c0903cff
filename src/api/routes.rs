//! API route configuration.

use crate::api::handlers::{create_short_link_handler, get_original_link_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Link routes.
///
/// # Endpoints
///
/// - `POST /create`            - Create (or reuse) a short link
/// - `GET  /get/{short_link}`  - Resolve a short link to its original link
pub fn link_routes() -> Router<AppState> {
    Router::new()
        .route("/create", post(create_short_link_handler))
        .route("/get/{short_link}", get(get_original_link_handler))
}
