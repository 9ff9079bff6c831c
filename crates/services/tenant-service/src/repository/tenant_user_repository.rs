//! Tenant user repository implementation.

use async_trait::async_trait;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};
use uuid::Uuid;

use super::entities::tenant_user::{self, ActiveModel, Entity as TenantUserEntity};
use common::{AppError, AppResult};
use domain::timestamp::next_updated_at;
use domain::{TenantUser, TenantUserChanges};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Tenant user repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait TenantUserRepository: Send + Sync {
    /// List the users owned by one tenant
    async fn list_by_tenant(&self, tenant_id: Uuid) -> AppResult<Vec<TenantUser>>;

    /// Find user by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<TenantUser>>;

    /// Insert a new user; a taken (tenant_id, email) pair yields `Conflict`,
    /// a missing tenant yields `NotFound`
    async fn create(&self, user: TenantUser) -> AppResult<TenantUser>;

    /// Write only the supplied fields and move `updated_at` forward
    async fn update(&self, id: Uuid, changes: TenantUserChanges) -> AppResult<TenantUser>;

    /// Permanently delete user
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

/// SeaORM-backed tenant user repository
pub struct TenantUserStore {
    db: DatabaseConnection,
}

impl TenantUserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TenantUserRepository for TenantUserStore {
    async fn list_by_tenant(&self, tenant_id: Uuid) -> AppResult<Vec<TenantUser>> {
        let models = TenantUserEntity::find()
            .filter(tenant_user::Column::TenantId.eq(tenant_id))
            .order_by_asc(tenant_user::Column::CreatedAt)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(TenantUser::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<TenantUser>> {
        let result = TenantUserEntity::find_by_id(id).one(&self.db).await?;
        Ok(result.map(TenantUser::from))
    }

    async fn create(&self, user: TenantUser) -> AppResult<TenantUser> {
        let model = ActiveModel::from(user)
            .insert(&self.db)
            .await
            .map_err(|e| AppError::from_write(e, "User"))?;

        Ok(TenantUser::from(model))
    }

    async fn update(&self, id: Uuid, changes: TenantUserChanges) -> AppResult<TenantUser> {
        let current = TenantUserEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        // Email and password hash are never part of the statement
        let mut update = TenantUserEntity::update_many()
            .col_expr(
                tenant_user::Column::UpdatedAt,
                Expr::value(next_updated_at(current.updated_at)),
            )
            .filter(tenant_user::Column::Id.eq(id));
        if let Some(first_name) = changes.first_name {
            update = update.col_expr(tenant_user::Column::FirstName, Expr::value(first_name));
        }
        if let Some(last_name) = changes.last_name {
            update = update.col_expr(tenant_user::Column::LastName, Expr::value(last_name));
        }
        if let Some(is_active) = changes.is_active {
            update = update.col_expr(tenant_user::Column::IsActive, Expr::value(is_active));
        }

        let result = update
            .exec(&self.db)
            .await
            .map_err(|e| AppError::from_write(e, "User"))?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        self.find_by_id(id).await?.ok_or(AppError::NotFound)
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = TenantUserEntity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}
