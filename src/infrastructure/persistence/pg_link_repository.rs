//! PostgreSQL implementation of link repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::Link;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

const DB_CONTEXT: &str = "database error (table links)";

/// PostgreSQL repository for link storage and retrieval.
///
/// Backed by the `links` table created by the bundled migrations. Both columns
/// carry a unique constraint, so racing inserts for the same original link
/// surface as [`AppError::Conflict`].
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn insert(&self, link: &Link) -> Result<(), AppError> {
        sqlx::query("INSERT INTO links (original_link, short_link) VALUES ($1, $2)")
            .bind(&link.original_link)
            .bind(&link.short_link)
            .execute(self.pool.as_ref())
            .await
            .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn find_by_original(&self, original_link: &str) -> Result<String, AppError> {
        sqlx::query_scalar::<_, String>("SELECT short_link FROM links WHERE original_link = $1")
            .bind(original_link)
            .fetch_one(self.pool.as_ref())
            .await
            .map_err(map_sqlx_error)
    }

    async fn find_by_short(&self, short_link: &str) -> Result<String, AppError> {
        sqlx::query_scalar::<_, String>("SELECT original_link FROM links WHERE short_link = $1")
            .bind(short_link)
            .fetch_one(self.pool.as_ref())
            .await
            .map_err(map_sqlx_error)
    }

    async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await
            .is_ok()
    }
}

/// Translates SQLx failures into the application taxonomy.
///
/// `RowNotFound` becomes [`AppError::NotFound`], unique violations become
/// [`AppError::Conflict`], everything else is wrapped as
/// [`AppError::Storage`].
pub fn map_sqlx_error(e: sqlx::Error) -> AppError {
    if matches!(e, sqlx::Error::RowNotFound) {
        return AppError::not_found();
    }

    if let Some(db) = e.as_database_error()
        && db.is_unique_violation()
    {
        return AppError::conflict(db.constraint().unwrap_or("unknown"));
    }

    AppError::storage(DB_CONTEXT, e)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_not_found_maps_to_not_found() {
        assert!(map_sqlx_error(sqlx::Error::RowNotFound).is_not_found());
    }

    #[test]
    fn test_other_errors_map_to_storage() {
        let err = map_sqlx_error(sqlx::Error::PoolTimedOut);
        assert!(matches!(err, AppError::Storage { .. }));
        assert!(err.to_string().starts_with(DB_CONTEXT));
    }
}
