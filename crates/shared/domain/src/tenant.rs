//! Tenant domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainResult;
use crate::slug::normalize_slug;

/// Tenant domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    /// Unique tenant identifier
    pub id: Uuid,
    /// Display name
    #[cfg_attr(feature = "openapi", schema(example = "Acme"))]
    pub name: String,
    /// Lower-case, globally unique slug
    #[cfg_attr(feature = "openapi", schema(example = "acme-corp"))]
    pub slug: String,
    /// Opaque connection string reserved for per-tenant routing
    pub connection_string: String,
    /// Whether the tenant is active
    pub is_active: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last mutation timestamp
    pub updated_at: DateTime<Utc>,
}

impl Tenant {
    /// Build a fresh, active tenant from creation input.
    ///
    /// The slug is normalized (trimmed, lower-cased) and validated.
    pub fn new(input: NewTenant) -> DomainResult<Self> {
        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            name: input.name,
            slug: normalize_slug(&input.slug)?,
            connection_string: input.connection_string,
            is_active: true,
            created_at: now,
            updated_at: now,
        })
    }

}

/// Tenant creation input
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewTenant {
    pub name: String,
    pub slug: String,
    pub connection_string: String,
}

/// Partial tenant update
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TenantChanges {
    pub name: Option<String>,
    pub is_active: Option<bool>,
}
