//! Tenant service - Handles tenant-related business logic.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use common::{AppResult, OptionExt};
use domain::{normalize_slug, NewTenant, Tenant, TenantChanges};

use crate::repository::TenantRepository;

/// Tenant service trait for dependency injection.
#[async_trait]
pub trait TenantService: Send + Sync {
    /// List all tenants
    async fn list_tenants(&self) -> AppResult<Vec<Tenant>>;

    /// Get tenant by ID
    async fn get_tenant(&self, id: Uuid) -> AppResult<Tenant>;

    /// Look up a tenant by slug, case-insensitively.
    ///
    /// Slugs that cannot exist (empty, bad characters) resolve to `None`.
    async fn find_tenant_by_slug(&self, slug: &str) -> AppResult<Option<Tenant>>;

    /// Create a new tenant
    async fn create_tenant(&self, input: NewTenant) -> AppResult<Tenant>;

    /// Update tenant name and/or active flag
    async fn update_tenant(&self, id: Uuid, changes: TenantChanges) -> AppResult<Tenant>;

    /// Delete tenant together with its users
    async fn delete_tenant(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of TenantService using repository.
pub struct TenantManager {
    repo: Arc<dyn TenantRepository>,
}

impl TenantManager {
    /// Create new tenant service instance with repository
    pub fn new(repo: Arc<dyn TenantRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl TenantService for TenantManager {
    async fn list_tenants(&self) -> AppResult<Vec<Tenant>> {
        self.repo.list().await
    }

    async fn get_tenant(&self, id: Uuid) -> AppResult<Tenant> {
        self.repo.find_by_id(id).await?.ok_or_not_found()
    }

    async fn find_tenant_by_slug(&self, slug: &str) -> AppResult<Option<Tenant>> {
        match normalize_slug(slug) {
            Ok(slug) => self.repo.find_by_slug(&slug).await,
            Err(_) => Ok(None),
        }
    }

    async fn create_tenant(&self, input: NewTenant) -> AppResult<Tenant> {
        let tenant = Tenant::new(input)?;
        let tenant = self.repo.create(tenant).await?;

        tracing::info!(tenant_id = %tenant.id, slug = %tenant.slug, "Tenant created");
        Ok(tenant)
    }

    async fn update_tenant(&self, id: Uuid, changes: TenantChanges) -> AppResult<Tenant> {
        self.repo.update(id, changes).await
    }

    async fn delete_tenant(&self, id: Uuid) -> AppResult<()> {
        self.repo.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockTenantRepository;
    use chrono::Utc;
    use common::AppError;
    use mockall::predicate::eq;

    fn create_test_tenant(id: Uuid, slug: &str) -> Tenant {
        Tenant {
            id,
            name: "Acme".to_string(),
            slug: slug.to_string(),
            connection_string: "Host=x".to_string(),
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_get_tenant_success() {
        let tenant_id = Uuid::new_v4();

        let mut repo = MockTenantRepository::new();
        repo.expect_find_by_id()
            .with(eq(tenant_id))
            .returning(|id| Ok(Some(create_test_tenant(id, "acme"))));

        let service = TenantManager::new(Arc::new(repo));
        let tenant = service.get_tenant(tenant_id).await.unwrap();

        assert_eq!(tenant.id, tenant_id);
    }

    #[tokio::test]
    async fn test_get_tenant_not_found() {
        let mut repo = MockTenantRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let service = TenantManager::new(Arc::new(repo));
        let result = service.get_tenant(Uuid::new_v4()).await;

        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_create_tenant_normalizes_slug() {
        let mut repo = MockTenantRepository::new();
        repo.expect_create()
            .withf(|tenant| tenant.slug == "acme-corp" && tenant.is_active)
            .returning(Ok);

        let service = TenantManager::new(Arc::new(repo));
        let tenant = service
            .create_tenant(NewTenant {
                name: "Acme".to_string(),
                slug: "  ACME-Corp ".to_string(),
                connection_string: "Host=x".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(tenant.slug, "acme-corp");
    }

    #[tokio::test]
    async fn test_create_tenant_invalid_slug_never_hits_store() {
        let mut repo = MockTenantRepository::new();
        repo.expect_create().never();

        let service = TenantManager::new(Arc::new(repo));
        let result = service
            .create_tenant(NewTenant {
                name: "Acme".to_string(),
                slug: "acme corp!".to_string(),
                connection_string: "Host=x".to_string(),
            })
            .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_create_tenant_conflict_propagates() {
        let mut repo = MockTenantRepository::new();
        repo.expect_create()
            .returning(|_| Err(AppError::conflict("Tenant")));

        let service = TenantManager::new(Arc::new(repo));
        let result = service
            .create_tenant(NewTenant {
                name: "Acme".to_string(),
                slug: "acme".to_string(),
                connection_string: "Host=x".to_string(),
            })
            .await;

        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_find_by_slug_is_case_insensitive() {
        let mut repo = MockTenantRepository::new();
        repo.expect_find_by_slug()
            .withf(|slug: &str| slug == "acme")
            .returning(|slug| Ok(Some(create_test_tenant(Uuid::new_v4(), slug))));

        let service = TenantManager::new(Arc::new(repo));
        let tenant = service.find_tenant_by_slug(" ACME ").await.unwrap();

        assert_eq!(tenant.map(|t| t.slug), Some("acme".to_string()));
    }

    #[tokio::test]
    async fn test_find_by_malformed_slug_is_none() {
        let mut repo = MockTenantRepository::new();
        repo.expect_find_by_slug().never();

        let service = TenantManager::new(Arc::new(repo));

        assert!(service.find_tenant_by_slug("").await.unwrap().is_none());
        assert!(service.find_tenant_by_slug("no spaces").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_tenant_not_found() {
        let mut repo = MockTenantRepository::new();
        repo.expect_delete().returning(|_| Err(AppError::NotFound));

        let service = TenantManager::new(Arc::new(repo));
        let result = service.delete_tenant(Uuid::new_v4()).await;

        assert!(matches!(result, Err(AppError::NotFound)));
    }
}
