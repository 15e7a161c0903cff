//! Application layer services implementing business logic.
//!
//! Services consume repository traits and expose the use-case interface the
//! HTTP and gRPC fronts call.
//!
//! - [`services::link_service::LinkService`] - Short link creation and lookup

pub mod services;
