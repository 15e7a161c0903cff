//! Link entity representing a shortened URL mapping.

use serde::{Deserialize, Serialize};

/// Mapping between an original URL and its generated short code.
///
/// `short_link` is empty until the link has been created (or found) by
/// [`crate::application::services::LinkService`]. Once stored, a short link is
/// never updated or deleted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub original_link: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub short_link: String,
}

impl Link {
    /// Creates a link that still needs a short code.
    pub fn new(original_link: impl Into<String>) -> Self {
        Self {
            original_link: original_link.into(),
            short_link: String::new(),
        }
    }

    /// Creates a fully populated link.
    pub fn with_short(original_link: impl Into<String>, short_link: impl Into<String>) -> Self {
        Self {
            original_link: original_link.into(),
            short_link: short_link.into(),
        }
    }
}
