//! Tenant user handlers.

use axum::{
    extract::State,
    http::{header::LOCATION, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use common::AppResult;
use domain::{NewTenantUser, TenantUser, TenantUserChanges};

use crate::extractors::{ApiPath, ValidatedJson};
use crate::state::AppState;

/// Tenant user creation request with validation
#[derive(Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTenantUserRequest {
    /// Owning tenant
    pub tenant_id: Uuid,
    #[validate(
        email(message = "Invalid email format"),
        length(max = 256, message = "Email must be at most 256 characters")
    )]
    #[schema(example = "a@b.com")]
    pub email: String,
    #[validate(length(min = 1, max = 256, message = "First name must be 1-256 characters"))]
    #[schema(example = "Ada")]
    pub first_name: String,
    #[validate(length(min = 1, max = 256, message = "Last name must be 1-256 characters"))]
    #[schema(example = "Lovelace")]
    pub last_name: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    #[schema(example = "correct-horse")]
    pub password: String,
}

impl From<CreateTenantUserRequest> for NewTenantUser {
    fn from(req: CreateTenantUserRequest) -> Self {
        NewTenantUser {
            tenant_id: req.tenant_id,
            email: req.email,
            first_name: req.first_name,
            last_name: req.last_name,
            password: req.password,
        }
    }
}

/// Tenant user update request; email and password cannot change
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTenantUserRequest {
    #[validate(length(min = 1, max = 256, message = "First name must be 1-256 characters"))]
    pub first_name: Option<String>,
    #[validate(length(min = 1, max = 256, message = "Last name must be 1-256 characters"))]
    pub last_name: Option<String>,
    pub is_active: Option<bool>,
}

impl From<UpdateTenantUserRequest> for TenantUserChanges {
    fn from(req: UpdateTenantUserRequest) -> Self {
        TenantUserChanges {
            first_name: req.first_name,
            last_name: req.last_name,
            is_active: req.is_active,
        }
    }
}

/// Create tenant user routes
pub fn tenant_user_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_user))
        .route("/tenant/:tenant_id", get(list_users_by_tenant))
        .route("/:id", get(get_user).put(update_user).delete(delete_user))
}

/// List users of one tenant
#[utoipa::path(
    get,
    path = "/api/tenantusers/tenant/{tenant_id}",
    tag = "Tenant Users",
    params(
        ("tenant_id" = Uuid, Path, description = "Tenant ID")
    ),
    responses(
        (status = 200, description = "Users of the tenant", body = Vec<TenantUser>)
    )
)]
pub async fn list_users_by_tenant(
    State(state): State<AppState>,
    ApiPath(tenant_id): ApiPath<Uuid>,
) -> AppResult<Json<Vec<TenantUser>>> {
    let users = state
        .tenant_user_service
        .list_users_by_tenant(tenant_id)
        .await?;
    Ok(Json(users))
}

/// Get tenant user by ID
#[utoipa::path(
    get,
    path = "/api/tenantusers/{id}",
    tag = "Tenant Users",
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Tenant user", body = TenantUser),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> AppResult<Json<TenantUser>> {
    let user = state.tenant_user_service.get_user(id).await?;
    Ok(Json(user))
}

/// Create a user under a tenant
#[utoipa::path(
    post,
    path = "/api/tenantusers",
    tag = "Tenant Users",
    request_body = CreateTenantUserRequest,
    responses(
        (status = 201, description = "User created", body = TenantUser),
        (status = 400, description = "Validation error or email already used in this tenant"),
        (status = 404, description = "Tenant not found")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateTenantUserRequest>,
) -> AppResult<Response> {
    let user = state.tenant_user_service.create_user(payload.into()).await?;
    let location = format!("/api/tenantusers/{}", user.id);

    Ok((StatusCode::CREATED, [(LOCATION, location)], Json(user)).into_response())
}

/// Update user names and/or active flag
#[utoipa::path(
    put,
    path = "/api/tenantusers/{id}",
    tag = "Tenant Users",
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    request_body = UpdateTenantUserRequest,
    responses(
        (status = 204, description = "User updated"),
        (status = 400, description = "Validation error"),
        (status = 404, description = "User not found")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateTenantUserRequest>,
) -> AppResult<StatusCode> {
    state
        .tenant_user_service
        .update_user(id, payload.into())
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete tenant user
#[utoipa::path(
    delete,
    path = "/api/tenantusers/{id}",
    tag = "Tenant Users",
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> AppResult<StatusCode> {
    state.tenant_user_service.delete_user(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
