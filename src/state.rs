use std::sync::Arc;

use crate::application::services::LinkUseCase;

/// Shared state injected into every HTTP handler.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<dyn LinkUseCase>,
    /// Name of the configured storage backend, reported by `/health`.
    pub storage_backend: &'static str,
}

impl AppState {
    pub fn new(link_service: Arc<dyn LinkUseCase>, storage_backend: &'static str) -> Self {
        Self {
            link_service,
            storage_backend,
        }
    }
}
