//! Repository trait for short link data access.

use crate::domain::entities::Link;
use crate::error::AppError;
use async_trait::async_trait;

/// Storage contract for original ↔ short link mappings.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryLinkRepository`] - process-local map
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL table
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Stores a new link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the backend enforces uniqueness and the
    /// original or short link already exists.
    ///
    /// Returns [`AppError::Storage`] on backend failures.
    async fn insert(&self, link: &Link) -> Result<(), AppError>;

    /// Finds the short link stored for an original link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the original link was never stored.
    /// Returns [`AppError::Storage`] on backend failures.
    async fn find_by_original(&self, original_link: &str) -> Result<String, AppError>;

    /// Finds the original link behind a short link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the short link is unknown.
    /// Returns [`AppError::Storage`] on backend failures.
    async fn find_by_short(&self, short_link: &str) -> Result<String, AppError>;

    /// Checks if the backend is reachable.
    async fn health_check(&self) -> bool;
}
