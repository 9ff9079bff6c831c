//! Health check handlers.

use axum::{extract::Extension, response::Json, routing::get, Router};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use domain::TenantContext;

use crate::state::AppState;

/// Health check response, echoing the tenant resolved for this request.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    #[schema(example = "healthy")]
    pub status: String,
    pub timestamp: DateTime<Utc>,
    /// Resolved tenant id, or `not-set`
    #[schema(example = "not-set")]
    pub tenant_id: String,
    /// Normalized tenant slug from the request header, or `not-set`
    #[schema(example = "acme-corp")]
    pub tenant_slug: String,
}

/// Create health routes.
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}

/// Liveness probe
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "Health",
    params(
        ("X-Tenant-Slug" = Option<String>, Header, description = "Tenant slug to resolve")
    ),
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    )
)]
pub async fn health_check(Extension(tenant): Extension<TenantContext>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now(),
        tenant_id: tenant.tenant_id_or_not_set(),
        tenant_slug: tenant.tenant_slug_or_not_set().to_string(),
    })
}
