//! Repository layer for data access.
//!
//! One repository per entity, each offering the same capability set
//! (list, get, create, update, delete) over a shared connection.

pub mod entities;
mod tenant_repository;
mod tenant_user_repository;

pub use tenant_repository::{TenantRepository, TenantStore};
pub use tenant_user_repository::{TenantUserRepository, TenantUserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use tenant_repository::MockTenantRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use tenant_user_repository::MockTenantUserRepository;
