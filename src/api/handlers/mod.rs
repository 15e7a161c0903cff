//! HTTP request handlers for API endpoints.

pub mod create;
pub mod health;
pub mod lookup;

pub use create::create_short_link_handler;
pub use health::health_handler;
pub use lookup::get_original_link_handler;
