//! Request middleware.

mod tenant;

pub use tenant::tenant_resolver_middleware;
