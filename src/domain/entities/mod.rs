//! Core domain entities.
//!
//! The service has a single entity, [`Link`], a plain data structure without
//! business logic.

pub mod link;

pub use link::Link;
