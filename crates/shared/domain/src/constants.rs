//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Tenant Resolution
// =============================================================================

/// Header carrying the tenant slug on inbound requests
pub const TENANT_SLUG_HEADER: &str = "x-tenant-slug";

/// Wire rendering of an unresolved tenant context field
pub const NOT_SET: &str = "not-set";

// =============================================================================
// Validation
// =============================================================================

/// Maximum length of names, slugs and emails
pub const MAX_FIELD_LENGTH: usize = 256;

/// Minimum password length requirement
pub const MIN_PASSWORD_LENGTH: usize = 8;
