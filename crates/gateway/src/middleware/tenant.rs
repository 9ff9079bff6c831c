//! Tenant resolution middleware.

use axum::{
    body::Body,
    extract::State,
    http::{HeaderMap, Request},
    middleware::Next,
    response::Response,
};

use common::{AppError, AppResult};
use domain::{TenantContext, TENANT_SLUG_HEADER};

use crate::state::AppState;

/// Build the request's [`TenantContext`] from `X-Tenant-Slug` and store it
/// in the request extensions before any handler runs.
pub async fn tenant_resolver_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let context = resolve_tenant(&state, request.headers()).await?;
    request.extensions_mut().insert(context);

    Ok(next.run(request).await)
}

async fn resolve_tenant(state: &AppState, headers: &HeaderMap) -> AppResult<TenantContext> {
    let Some(slug) = extract_slug(headers) else {
        return Ok(TenantContext::unset());
    };

    let tenant = state.tenant_service.find_tenant_by_slug(&slug).await?;
    let context = TenantContext {
        tenant_id: tenant.map(|t| t.id),
        tenant_slug: Some(slug),
    };

    if context.is_resolved() {
        tracing::debug!(
            tenant_id = %context.tenant_id_or_not_set(),
            slug = %context.tenant_slug_or_not_set(),
            "Tenant resolved"
        );
    } else if state.config.require_known_tenant {
        tracing::debug!(slug = %context.tenant_slug_or_not_set(), "Rejecting unknown tenant");
        return Err(AppError::NotFound);
    } else {
        tracing::debug!(slug = %context.tenant_slug_or_not_set(), "Unknown tenant slug");
    }

    Ok(context)
}

/// Trimmed, lower-cased header value; `None` when absent, blank or not UTF-8.
fn extract_slug(headers: &HeaderMap) -> Option<String> {
    headers
        .get(TENANT_SLUG_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_lowercase)
}
