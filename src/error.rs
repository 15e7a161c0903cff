//! Application error taxonomy and its HTTP / gRPC representations.
//!
//! Every layer returns [`AppError`]. The store wraps backend failures with one
//! layer of context, the service adds another, and the delivery fronts map the
//! variant to a status code with a fixed, generic message. The detailed error
//! chain is only ever logged.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Boxed underlying cause of a storage failure.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

pub const MSG_BAD_REQUEST: &str = "bad request";
pub const MSG_NOT_FOUND: &str = "item is not found";
pub const MSG_INTERNAL: &str = "internal server error";

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Client-visible error payload.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: &'static str,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed or invalid input rejected at the edge.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// The requested record does not exist.
    #[error("{context}item is not found")]
    NotFound { context: String },

    /// A uniqueness constraint rejected an insert.
    #[error("{context}unique constraint violation ({constraint})")]
    Conflict { context: String, constraint: String },

    /// Backend I/O or query failure.
    #[error("{context}: {source}")]
    Storage {
        context: String,
        #[source]
        source: BoxError,
    },

    /// Short code derivation failed.
    #[error("{context}{reason}")]
    Generation { context: String, reason: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound {
            context: String::new(),
        }
    }

    pub fn conflict(constraint: impl Into<String>) -> Self {
        Self::Conflict {
            context: String::new(),
            constraint: constraint.into(),
        }
    }

    pub fn storage(context: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::Storage {
            context: context.into(),
            source: source.into(),
        }
    }

    pub fn generation(reason: impl Into<String>) -> Self {
        Self::Generation {
            context: String::new(),
            reason: reason.into(),
        }
    }

    /// Prepends a diagnostic context layer without changing the variant.
    pub fn context(self, ctx: &str) -> Self {
        match self {
            Self::BadRequest(message) => Self::BadRequest(format!("{ctx}: {message}")),
            Self::NotFound { context } => Self::NotFound {
                context: format!("{ctx}: {context}"),
            },
            Self::Conflict {
                context,
                constraint,
            } => Self::Conflict {
                context: format!("{ctx}: {context}"),
                constraint,
            },
            Self::Storage { context, source } => Self::Storage {
                context: format!("{ctx}: {context}"),
                source,
            },
            Self::Generation { context, reason } => Self::Generation {
                context: format!("{ctx}: {context}"),
                reason,
            },
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict { .. })
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Conflict { .. } | Self::Storage { .. } | Self::Generation { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Fixed client-visible payload for this error category.
    pub fn to_error_info(&self) -> ErrorInfo {
        match self {
            Self::BadRequest(_) => ErrorInfo {
                code: "bad_request",
                message: MSG_BAD_REQUEST,
            },
            Self::NotFound { .. } => ErrorInfo {
                code: "not_found",
                message: MSG_NOT_FOUND,
            },
            _ => ErrorInfo {
                code: "internal_error",
                message: MSG_INTERNAL,
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            Self::NotFound { .. } => tracing::debug!(error = %self, "request failed"),
            Self::BadRequest(_) => tracing::warn!(error = %self, "request rejected"),
            _ => tracing::error!(error = %self, "request failed"),
        }

        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (self.status_code(), Json(body)).into_response()
    }
}

impl From<AppError> for tonic::Status {
    fn from(err: AppError) -> Self {
        match &err {
            AppError::NotFound { .. } => tracing::debug!(error = %err, "rpc failed"),
            AppError::BadRequest(_) => tracing::warn!(error = %err, "rpc rejected"),
            _ => tracing::error!(error = %err, "rpc failed"),
        }

        match err {
            AppError::BadRequest(_) => tonic::Status::invalid_argument(MSG_BAD_REQUEST),
            AppError::NotFound { .. } => tonic::Status::not_found(MSG_NOT_FOUND),
            _ => tonic::Status::internal(MSG_INTERNAL),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::BadRequest(errors.to_string())
    }
}
