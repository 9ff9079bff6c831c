//! Per-request tenant context.

use uuid::Uuid;

use crate::constants::NOT_SET;

/// Tenant identity resolved for a single inbound request.
///
/// A fresh value is built for every request and travels with that request
/// only. Both fields start unset (`None`); the resolver fills them in when
/// the request names a tenant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TenantContext {
    pub tenant_id: Option<Uuid>,
    pub tenant_slug: Option<String>,
}

impl TenantContext {
    /// Context with nothing resolved.
    pub fn unset() -> Self {
        Self::default()
    }

    /// True once a tenant record has been matched.
    pub fn is_resolved(&self) -> bool {
        self.tenant_id.is_some()
    }

    /// Tenant id as rendered on the wire.
    pub fn tenant_id_or_not_set(&self) -> String {
        self.tenant_id
            .map(|id| id.to_string())
            .unwrap_or_else(|| NOT_SET.to_string())
    }

    /// Tenant slug as rendered on the wire.
    pub fn tenant_slug_or_not_set(&self) -> &str {
        self.tenant_slug.as_deref().unwrap_or(NOT_SET)
    }
}
