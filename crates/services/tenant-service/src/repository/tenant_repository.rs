//! Tenant repository implementation.

use async_trait::async_trait;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, TransactionTrait,
};
use uuid::Uuid;

use super::entities::tenant::{self, ActiveModel, Entity as TenantEntity};
use super::entities::tenant_user::{self, Entity as TenantUserEntity};
use common::{AppError, AppResult};
use domain::timestamp::next_updated_at;
use domain::{Tenant, TenantChanges};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Tenant repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait TenantRepository: Send + Sync {
    /// List every tenant, oldest first
    async fn list(&self) -> AppResult<Vec<Tenant>>;

    /// Find tenant by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Tenant>>;

    /// Find tenant by its (already normalized) slug
    async fn find_by_slug(&self, slug: &str) -> AppResult<Option<Tenant>>;

    /// Insert a new tenant; a taken slug yields `Conflict`
    async fn create(&self, tenant: Tenant) -> AppResult<Tenant>;

    /// Write only the supplied fields and move `updated_at` forward
    async fn update(&self, id: Uuid, changes: TenantChanges) -> AppResult<Tenant>;

    /// Delete tenant and the users it owns
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

/// SeaORM-backed tenant repository
pub struct TenantStore {
    db: DatabaseConnection,
}

impl TenantStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TenantRepository for TenantStore {
    async fn list(&self) -> AppResult<Vec<Tenant>> {
        let models = TenantEntity::find()
            .order_by_asc(tenant::Column::CreatedAt)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Tenant::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Tenant>> {
        let result = TenantEntity::find_by_id(id).one(&self.db).await?;
        Ok(result.map(Tenant::from))
    }

    async fn find_by_slug(&self, slug: &str) -> AppResult<Option<Tenant>> {
        let result = TenantEntity::find()
            .filter(tenant::Column::Slug.eq(slug))
            .one(&self.db)
            .await?;

        Ok(result.map(Tenant::from))
    }

    async fn create(&self, tenant: Tenant) -> AppResult<Tenant> {
        // No pre-check: the unique slug index decides which writer wins
        let model = ActiveModel::from(tenant)
            .insert(&self.db)
            .await
            .map_err(|e| AppError::from_write(e, "Tenant"))?;

        Ok(Tenant::from(model))
    }

    async fn update(&self, id: Uuid, changes: TenantChanges) -> AppResult<Tenant> {
        let current = TenantEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        // Only supplied columns are written
        let mut update = TenantEntity::update_many()
            .col_expr(
                tenant::Column::UpdatedAt,
                Expr::value(next_updated_at(current.updated_at)),
            )
            .filter(tenant::Column::Id.eq(id));
        if let Some(name) = changes.name {
            update = update.col_expr(tenant::Column::Name, Expr::value(name));
        }
        if let Some(is_active) = changes.is_active {
            update = update.col_expr(tenant::Column::IsActive, Expr::value(is_active));
        }

        let result = update
            .exec(&self.db)
            .await
            .map_err(|e| AppError::from_write(e, "Tenant"))?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        self.find_by_id(id).await?.ok_or(AppError::NotFound)
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let txn = self.db.begin().await?;

        let users = TenantUserEntity::delete_many()
            .filter(tenant_user::Column::TenantId.eq(id))
            .exec(&txn)
            .await?;

        let result = TenantEntity::delete_by_id(id).exec(&txn).await?;
        if result.rows_affected == 0 {
            txn.rollback().await?;
            return Err(AppError::NotFound);
        }

        txn.commit().await?;

        tracing::info!(
            tenant_id = %id,
            users_removed = users.rows_affected,
            "Tenant deleted"
        );
        Ok(())
    }
}
