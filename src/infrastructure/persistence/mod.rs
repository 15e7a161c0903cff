//! Link repository implementations.
//!
//! - [`InMemoryLinkRepository`] - process-local map behind a reader/writer lock
//! - [`PgLinkRepository`] - PostgreSQL table accessed through SQLx

pub mod in_memory_link_repository;
pub mod pg_link_repository;

pub use in_memory_link_repository::InMemoryLinkRepository;
pub use pg_link_repository::PgLinkRepository;
