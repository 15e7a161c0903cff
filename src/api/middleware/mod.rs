//! HTTP middleware for request processing.
//!
//! - [`tracing`] - structured request/response logging
//! - [`panic`] - converts handler panics into 500 responses

pub mod panic;
pub mod tracing;
