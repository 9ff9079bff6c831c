//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! Tenants, their users, the per-request tenant context and the rules
//! that govern them live here and are shared by every other crate.

pub mod constants;
pub mod context;
pub mod error;
pub mod password;
pub mod slug;
pub mod tenant;
pub mod tenant_user;
pub mod timestamp;

pub use constants::*;
pub use context::TenantContext;
pub use error::{DomainError, DomainResult};
pub use password::Password;
pub use slug::normalize_slug;
pub use tenant::{NewTenant, Tenant, TenantChanges};
pub use tenant_user::{NewTenantUser, TenantUser, TenantUserChanges};
