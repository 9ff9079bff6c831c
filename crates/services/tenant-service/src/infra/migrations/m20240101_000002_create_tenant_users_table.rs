//! Migration: Create tenant_users table.
//!
//! Users belong to a tenant through a cascading foreign key, and
//! (tenant_id, email) is unique.

use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_tenants_table::Tenants;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TenantUsers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TenantUsers::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TenantUsers::TenantId).uuid().not_null())
                    .col(ColumnDef::new(TenantUsers::Email).string_len(256).not_null())
                    .col(
                        ColumnDef::new(TenantUsers::FirstName)
                            .string_len(256)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TenantUsers::LastName)
                            .string_len(256)
                            .not_null(),
                    )
                    .col(ColumnDef::new(TenantUsers::PasswordHash).text().not_null())
                    .col(
                        ColumnDef::new(TenantUsers::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(TenantUsers::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TenantUsers::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tenant_users_tenant_id")
                            .from(TenantUsers::Table, TenantUsers::TenantId)
                            .to(Tenants::Table, Tenants::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        // Email uniqueness is per tenant, not global
        manager
            .create_index(
                Index::create()
                    .name("idx_tenant_users_tenant_id_email")
                    .table(TenantUsers::Table)
                    .col(TenantUsers::TenantId)
                    .col(TenantUsers::Email)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TenantUsers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum TenantUsers {
    Table,
    Id,
    TenantId,
    Email,
    FirstName,
    LastName,
    PasswordHash,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
