//! gRPC delivery front.
//!
//! - [`proto`] - `link.Links` messages and generated client/server stubs
//! - [`handler`] - [`handler::LinksHandler`], the service implementation

pub mod handler;
pub mod proto;

pub use handler::LinksHandler;
