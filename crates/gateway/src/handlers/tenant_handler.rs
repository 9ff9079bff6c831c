//! Tenant handlers.

use axum::{
    extract::State,
    http::{header::LOCATION, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use common::AppResult;
use domain::{NewTenant, Tenant, TenantChanges};

use crate::extractors::{ApiPath, ValidatedJson};
use crate::state::AppState;

/// Tenant creation request with validation
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTenantRequest {
    /// Display name
    #[validate(length(min = 1, max = 256, message = "Name must be 1-256 characters"))]
    #[schema(example = "Acme")]
    pub name: String,
    /// URL-safe identifier, stored lower-cased
    #[validate(length(min = 1, max = 256, message = "Slug must be 1-256 characters"))]
    #[schema(example = "Acme-Corp")]
    pub slug: String,
    /// Opaque per-tenant connection string
    #[validate(length(min = 1, message = "Connection string is required"))]
    #[schema(example = "Host=db;Database=acme")]
    pub connection_string: String,
}

impl From<CreateTenantRequest> for NewTenant {
    fn from(req: CreateTenantRequest) -> Self {
        NewTenant {
            name: req.name,
            slug: req.slug,
            connection_string: req.connection_string,
        }
    }
}

/// Tenant update request; absent fields are left untouched
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTenantRequest {
    #[validate(length(min = 1, max = 256, message = "Name must be 1-256 characters"))]
    #[schema(example = "Acme Inc")]
    pub name: Option<String>,
    pub is_active: Option<bool>,
}

impl From<UpdateTenantRequest> for TenantChanges {
    fn from(req: UpdateTenantRequest) -> Self {
        TenantChanges {
            name: req.name,
            is_active: req.is_active,
        }
    }
}

/// Create tenant routes
pub fn tenant_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_tenants).post(create_tenant))
        .route(
            "/:id",
            get(get_tenant).put(update_tenant).delete(delete_tenant),
        )
}

/// List all tenants
#[utoipa::path(
    get,
    path = "/api/tenants",
    tag = "Tenants",
    responses(
        (status = 200, description = "All tenants", body = Vec<Tenant>)
    )
)]
pub async fn list_tenants(State(state): State<AppState>) -> AppResult<Json<Vec<Tenant>>> {
    let tenants = state.tenant_service.list_tenants().await?;
    Ok(Json(tenants))
}

/// Get tenant by ID
#[utoipa::path(
    get,
    path = "/api/tenants/{id}",
    tag = "Tenants",
    params(
        ("id" = Uuid, Path, description = "Tenant ID")
    ),
    responses(
        (status = 200, description = "Tenant", body = Tenant),
        (status = 404, description = "Tenant not found")
    )
)]
pub async fn get_tenant(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> AppResult<Json<Tenant>> {
    let tenant = state.tenant_service.get_tenant(id).await?;
    Ok(Json(tenant))
}

/// Create a tenant
#[utoipa::path(
    post,
    path = "/api/tenants",
    tag = "Tenants",
    request_body = CreateTenantRequest,
    responses(
        (status = 201, description = "Tenant created", body = Tenant),
        (status = 400, description = "Validation error or slug already taken")
    )
)]
pub async fn create_tenant(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateTenantRequest>,
) -> AppResult<Response> {
    let tenant = state.tenant_service.create_tenant(payload.into()).await?;
    let location = format!("/api/tenants/{}", tenant.id);

    Ok((StatusCode::CREATED, [(LOCATION, location)], Json(tenant)).into_response())
}

/// Update tenant name and/or active flag
#[utoipa::path(
    put,
    path = "/api/tenants/{id}",
    tag = "Tenants",
    params(
        ("id" = Uuid, Path, description = "Tenant ID")
    ),
    request_body = UpdateTenantRequest,
    responses(
        (status = 204, description = "Tenant updated"),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Tenant not found")
    )
)]
pub async fn update_tenant(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateTenantRequest>,
) -> AppResult<StatusCode> {
    state.tenant_service.update_tenant(id, payload.into()).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete tenant and its users
#[utoipa::path(
    delete,
    path = "/api/tenants/{id}",
    tag = "Tenants",
    params(
        ("id" = Uuid, Path, description = "Tenant ID")
    ),
    responses(
        (status = 204, description = "Tenant deleted"),
        (status = 404, description = "Tenant not found")
    )
)]
pub async fn delete_tenant(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> AppResult<StatusCode> {
    state.tenant_service.delete_tenant(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
