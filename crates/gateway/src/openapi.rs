//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::handlers::health_handler::HealthResponse;
use crate::handlers::tenant_handler::{CreateTenantRequest, UpdateTenantRequest};
use crate::handlers::tenant_user_handler::{CreateTenantUserRequest, UpdateTenantUserRequest};
use domain::{Tenant, TenantUser};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health_handler::health_check,
        crate::handlers::tenant_handler::list_tenants,
        crate::handlers::tenant_handler::get_tenant,
        crate::handlers::tenant_handler::create_tenant,
        crate::handlers::tenant_handler::update_tenant,
        crate::handlers::tenant_handler::delete_tenant,
        crate::handlers::tenant_user_handler::list_users_by_tenant,
        crate::handlers::tenant_user_handler::get_user,
        crate::handlers::tenant_user_handler::create_user,
        crate::handlers::tenant_user_handler::update_user,
        crate::handlers::tenant_user_handler::delete_user,
    ),
    components(
        schemas(
            HealthResponse,
            Tenant,
            TenantUser,
            CreateTenantRequest,
            UpdateTenantRequest,
            CreateTenantUserRequest,
            UpdateTenantUserRequest,
        )
    ),
    tags(
        (name = "Health", description = "Liveness and tenant resolution probe"),
        (name = "Tenants", description = "Tenant management endpoints"),
        (name = "Tenant Users", description = "Per-tenant user management endpoints"),
    )
)]
pub struct ApiDoc;
