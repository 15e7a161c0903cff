//! Link creation and retrieval service.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::domain::entities::Link;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::CodeGenerator;

const REPOSITORY_CONTEXT: &str = "link repository error";
const GENERATION_CONTEXT: &str = "generation short link error";

/// Use-case interface called by the HTTP and gRPC fronts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkUseCase: Send + Sync {
    /// Fills `link.short_link` with the code for `link.original_link`,
    /// creating and storing one if the original link is new.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] or [`AppError::Generation`].
    async fn create_short_link(&self, link: &mut Link) -> Result<(), AppError>;

    /// Resolves a short link to its original link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for unknown short links and
    /// [`AppError::Storage`] on backend failures.
    async fn get_original_link(&self, short_link: &str) -> Result<String, AppError>;

    /// Reports whether the storage backend is reachable.
    async fn health_check(&self) -> bool;
}

/// Service for creating and retrieving shortened links.
///
/// # Deduplication
///
/// Creation first looks the original link up; a hit reuses the stored code and
/// writes nothing. A miss derives a new code and inserts it.
///
/// The lookup and the insert are separate store calls. Two concurrent creates
/// for the same new link may both miss; with the in-memory backend each caller
/// then keeps the code its own request generated. Backends that enforce
/// uniqueness report the loser's insert as [`AppError::Conflict`], in which
/// case the stored code is read back once and returned instead.
pub struct LinkService<R: ?Sized, G: ?Sized> {
    link_repository: Arc<R>,
    code_generator: Arc<G>,
}

impl<R, G> LinkService<R, G>
where
    R: LinkRepository + ?Sized,
    G: CodeGenerator + ?Sized,
{
    /// Creates a new link service.
    pub fn new(link_repository: Arc<R>, code_generator: Arc<G>) -> Self {
        Self {
            link_repository,
            code_generator,
        }
    }

    async fn resolve_conflict(&self, link: &mut Link, err: AppError) -> Result<(), AppError> {
        warn!(
            original_link = %link.original_link,
            error = %err,
            "Concurrent create detected, reading stored short link"
        );

        match self
            .link_repository
            .find_by_original(&link.original_link)
            .await
        {
            Ok(short_link) => {
                link.short_link = short_link;
                Ok(())
            }
            Err(reread) if reread.is_not_found() => Err(err.context(REPOSITORY_CONTEXT)),
            Err(reread) => {
                warn!(error = %err, "Conflict re-read failed");
                Err(reread.context(REPOSITORY_CONTEXT))
            }
        }
    }
}

#[async_trait]
impl<R, G> LinkUseCase for LinkService<R, G>
where
    R: LinkRepository + ?Sized,
    G: CodeGenerator + ?Sized,
{
    async fn create_short_link(&self, link: &mut Link) -> Result<(), AppError> {
        match self
            .link_repository
            .find_by_original(&link.original_link)
            .await
        {
            Ok(short_link) => {
                debug!(%short_link, "Reusing existing short link");
                link.short_link = short_link;
                return Ok(());
            }
            Err(e) if e.is_not_found() => {}
            Err(e) => return Err(e.context(REPOSITORY_CONTEXT)),
        }

        link.short_link = self
            .code_generator
            .generate(&link.original_link)
            .map_err(|e| e.context(GENERATION_CONTEXT))?;

        match self.link_repository.insert(link).await {
            Ok(()) => {
                info!(short_link = %link.short_link, "Short link created");
                Ok(())
            }
            Err(e) if e.is_conflict() => self.resolve_conflict(link, e).await,
            Err(e) => Err(e.context(REPOSITORY_CONTEXT)),
        }
    }

    async fn get_original_link(&self, short_link: &str) -> Result<String, AppError> {
        self.link_repository
            .find_by_short(short_link)
            .await
            .map_err(|e| e.context(REPOSITORY_CONTEXT))
    }

    async fn health_check(&self) -> bool {
        self.link_repository.health_check().await
    }
}
