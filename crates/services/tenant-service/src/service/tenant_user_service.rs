//! Tenant user service - Handles user management within a tenant.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use common::{AppError, AppResult, OptionExt};
use domain::{NewTenantUser, TenantUser, TenantUserChanges};

use crate::repository::{TenantRepository, TenantUserRepository};

/// Tenant user service trait for dependency injection.
#[async_trait]
pub trait TenantUserService: Send + Sync {
    /// List users belonging to a tenant (empty for unknown tenants)
    async fn list_users_by_tenant(&self, tenant_id: Uuid) -> AppResult<Vec<TenantUser>>;

    /// Get user by ID
    async fn get_user(&self, id: Uuid) -> AppResult<TenantUser>;

    /// Create a user under an existing tenant, hashing the password
    async fn create_user(&self, input: NewTenantUser) -> AppResult<TenantUser>;

    /// Update user names and/or active flag
    async fn update_user(&self, id: Uuid, changes: TenantUserChanges) -> AppResult<TenantUser>;

    /// Permanently delete user
    async fn delete_user(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of TenantUserService using repositories.
pub struct TenantUserManager {
    users: Arc<dyn TenantUserRepository>,
    tenants: Arc<dyn TenantRepository>,
}

impl TenantUserManager {
    /// Create new tenant user service instance
    pub fn new(users: Arc<dyn TenantUserRepository>, tenants: Arc<dyn TenantRepository>) -> Self {
        Self { users, tenants }
    }
}

#[async_trait]
impl TenantUserService for TenantUserManager {
    async fn list_users_by_tenant(&self, tenant_id: Uuid) -> AppResult<Vec<TenantUser>> {
        self.users.list_by_tenant(tenant_id).await
    }

    async fn get_user(&self, id: Uuid) -> AppResult<TenantUser> {
        self.users.find_by_id(id).await?.ok_or_not_found()
    }

    async fn create_user(&self, input: NewTenantUser) -> AppResult<TenantUser> {
        if self.tenants.find_by_id(input.tenant_id).await?.is_none() {
            return Err(AppError::NotFound);
        }

        // Argon2 hashing is CPU-bound
        let user = tokio::task::spawn_blocking(move || TenantUser::new(input))
            .await
            .map_err(|e| AppError::internal(format!("Password hashing task failed: {}", e)))??;

        let user = self.users.create(user).await?;

        tracing::info!(user_id = %user.id, tenant_id = %user.tenant_id, "Tenant user created");
        Ok(user)
    }

    async fn update_user(&self, id: Uuid, changes: TenantUserChanges) -> AppResult<TenantUser> {
        self.users.update(id, changes).await
    }

    async fn delete_user(&self, id: Uuid) -> AppResult<()> {
        self.users.delete(id).await?;

        tracing::info!(user_id = %id, "Tenant user deleted");
        Ok(())
    }
}
