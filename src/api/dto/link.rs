//! DTOs for link create and lookup endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a single original link.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLinkRequest {
    /// The original URL to shorten. Missing and empty values are rejected.
    #[serde(default)]
    #[validate(length(min = 1, message = "original_link is required"))]
    pub original_link: String,
}

/// Successful response wrapper: `{"body": ...}`.
#[derive(Debug, Serialize)]
pub struct ResponseBody<T> {
    pub body: T,
}

impl<T> ResponseBody<T> {
    pub fn new(body: T) -> Self {
        Self { body }
    }
}

#[derive(Debug, Serialize)]
pub struct ShortLinkResponse {
    pub short_link: String,
}

#[derive(Debug, Serialize)]
pub struct OriginalLinkResponse {
    pub original_link: String,
}
