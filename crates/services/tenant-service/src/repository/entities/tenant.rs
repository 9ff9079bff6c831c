//! Tenant database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use domain::Tenant;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tenants")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(unique)]
    pub slug: String,
    pub connection_string: String,
    pub is_active: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::tenant_user::Entity")]
    TenantUsers,
}

impl Related<super::tenant_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TenantUsers.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Tenant {
    fn from(model: Model) -> Self {
        Tenant {
            id: model.id,
            name: model.name,
            slug: model.slug,
            connection_string: model.connection_string,
            is_active: model.is_active,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Convert a fresh domain entity into an insertable active model
impl From<Tenant> for ActiveModel {
    fn from(tenant: Tenant) -> Self {
        ActiveModel {
            id: Set(tenant.id),
            name: Set(tenant.name),
            slug: Set(tenant.slug),
            connection_string: Set(tenant.connection_string),
            is_active: Set(tenant.is_active),
            created_at: Set(tenant.created_at),
            updated_at: Set(tenant.updated_at),
        }
    }
}
