//! Handler for short link lookup.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::link::{OriginalLinkResponse, ResponseBody};
use crate::error::AppError;
use crate::state::AppState;

/// Returns the original link behind a short link.
///
/// # Endpoint
///
/// `GET /get/{short_link}`
///
/// # Response
///
/// ```json
/// { "body": { "original_link": "https://www.golang.org" } }
/// ```
///
/// # Errors
///
/// - 404 Not Found if the short link is unknown
/// - 500 Internal Server Error on storage failures
pub async fn get_original_link_handler(
    Path(short_link): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ResponseBody<OriginalLinkResponse>>, AppError> {
    let original_link = state.link_service.get_original_link(&short_link).await?;

    Ok(Json(ResponseBody::new(OriginalLinkResponse { original_link })))
}
