//! HTTP request handlers.

pub mod health_handler;
pub mod tenant_handler;
pub mod tenant_user_handler;

pub use health_handler::health_routes;
pub use tenant_handler::tenant_routes;
pub use tenant_user_handler::tenant_user_routes;
