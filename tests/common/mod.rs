#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use rand::SeedableRng;
use rand::rngs::StdRng;
use link_shortener::domain::entities::Link;
use link_shortener::domain::repositories::LinkRepository;
use link_shortener::error::AppError;
use link_shortener::infrastructure::persistence::InMemoryLinkRepository;
use link_shortener::prelude::{LinkService, LinkUseCase, Sha256CodeGenerator};
use link_shortener::state::AppState;
use std::sync::Arc;

/// Repository whose every call fails like an unreachable database.
pub struct FailingRepository;

#[async_trait]
impl LinkRepository for FailingRepository {
    async fn insert(&self, _link: &Link) -> Result<(), AppError> {
        Err(AppError::storage("database error (table links)", "connection refused"))
    }

    async fn find_by_original(&self, _original_link: &str) -> Result<String, AppError> {
        Err(AppError::storage("database error (table links)", "connection refused"))
    }

    async fn find_by_short(&self, _short_link: &str) -> Result<String, AppError> {
        Err(AppError::storage("database error (table links)", "connection refused"))
    }

    async fn health_check(&self) -> bool {
        false
    }
}

pub fn create_service<R: LinkRepository + 'static>(repo: Arc<R>) -> Arc<dyn LinkUseCase> {
    let generator = Arc::new(Sha256CodeGenerator::new(StdRng::seed_from_u64(11)));
    Arc::new(LinkService::new(repo, generator))
}

pub fn create_test_state() -> (AppState, Arc<InMemoryLinkRepository>) {
    let repo = Arc::new(InMemoryLinkRepository::new());
    let state = AppState::new(create_service(repo.clone()), "in_memory");
    (state, repo)
}

pub fn create_failing_state() -> AppState {
    AppState::new(create_service(Arc::new(FailingRepository)), "postgres")
}

pub fn create_test_app() -> (Router, Arc<InMemoryLinkRepository>) {
    let (state, repo) = create_test_state();
    let app = Router::new()
        .merge(link_shortener::api::routes::link_routes())
        .with_state(state);
    (app, repo)
}
