//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod tenant;
pub mod tenant_user;
