//! Service container - wires repositories into services.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::{TenantManager, TenantService, TenantUserManager, TenantUserService};
use crate::repository::{TenantStore, TenantUserStore};

/// Centralized access to the application services.
pub trait ServiceContainer: Send + Sync {
    /// Get tenant service
    fn tenants(&self) -> Arc<dyn TenantService>;

    /// Get tenant user service
    fn tenant_users(&self) -> Arc<dyn TenantUserService>;
}

/// Concrete implementation of ServiceContainer
#[derive(Clone)]
pub struct Services {
    tenant_service: Arc<dyn TenantService>,
    tenant_user_service: Arc<dyn TenantUserService>,
}

impl Services {
    /// Create a new service container from already-built services
    pub fn new(
        tenant_service: Arc<dyn TenantService>,
        tenant_user_service: Arc<dyn TenantUserService>,
    ) -> Self {
        Self {
            tenant_service,
            tenant_user_service,
        }
    }

    /// Create service container backed by a database connection
    pub fn from_connection(db: DatabaseConnection) -> Self {
        let tenant_repo = Arc::new(TenantStore::new(db.clone()));
        let user_repo = Arc::new(TenantUserStore::new(db));

        Self {
            tenant_service: Arc::new(TenantManager::new(tenant_repo.clone())),
            tenant_user_service: Arc::new(TenantUserManager::new(user_repo, tenant_repo)),
        }
    }
}

impl ServiceContainer for Services {
    fn tenants(&self) -> Arc<dyn TenantService> {
        self.tenant_service.clone()
    }

    fn tenant_users(&self) -> Arc<dyn TenantUserService> {
        self.tenant_user_service.clone()
    }
}
