//! Application services.

mod container;
mod tenant_service;
mod tenant_user_service;

pub use container::{ServiceContainer, Services};
pub use tenant_service::{TenantManager, TenantService};
pub use tenant_user_service::{TenantUserManager, TenantUserService};
