//! Handler for the link creation endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::link::{CreateLinkRequest, ResponseBody, ShortLinkResponse};
use crate::domain::entities::Link;
use crate::error::AppError;
use crate::state::AppState;

/// Creates (or reuses) the short link for an original link.
///
/// # Endpoint
///
/// `POST /create`
///
/// # Request Body
///
/// ```json
/// { "original_link": "https://www.golang.org" }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// { "body": { "short_link": "Xb3_k9aQzL" } }
/// ```
///
/// Creating the same original link again returns the same short link.
///
/// # Errors
///
/// - 400 Bad Request if the body is not valid JSON or `original_link` is empty
/// - 500 Internal Server Error on storage or generation failures
pub async fn create_short_link_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateLinkRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ResponseBody<ShortLinkResponse>>), AppError> {
    let Json(payload) = payload.map_err(|e| AppError::bad_request(e.body_text()))?;
    payload.validate()?;

    let mut link = Link::new(payload.original_link);
    state.link_service.create_short_link(&mut link).await?;

    Ok((
        StatusCode::CREATED,
        Json(ResponseBody::new(ShortLinkResponse {
            short_link: link.short_link,
        })),
    ))
}
