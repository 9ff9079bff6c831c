//! Route configuration.

use axum::{http::HeaderValue, middleware, Router};
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers::{health_routes, tenant_routes, tenant_user_routes};
use crate::middleware::tenant_resolver_middleware;
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Create the main router with all routes.
///
/// Every request passes through the tenant resolver before reaching a
/// handler.
pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        .nest("/health", health_routes())
        .nest("/tenants", tenant_routes())
        .nest("/tenantusers", tenant_user_routes());

    Router::new()
        .nest("/api", api)
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            tenant_resolver_middleware,
        ))
        .with_state(state)
}

/// Build the CORS layer; no configured origins means any origin.
pub fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    if allowed_origins.is_empty() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}
