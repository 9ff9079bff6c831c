//! Application state for dependency injection.

use std::sync::Arc;

use tenant_service_lib::service::{ServiceContainer, TenantService, TenantUserService};

use crate::config::GatewayConfig;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub tenant_service: Arc<dyn TenantService>,
    pub tenant_user_service: Arc<dyn TenantUserService>,
    pub config: GatewayConfig,
}

impl AppState {
    /// Create new app state.
    pub fn new(services: &dyn ServiceContainer, config: GatewayConfig) -> Self {
        Self {
            tenant_service: services.tenants(),
            tenant_user_service: services.tenant_users(),
            config,
        }
    }
}
