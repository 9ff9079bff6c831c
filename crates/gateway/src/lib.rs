//! API Gateway Library
//!
//! HTTP REST surface for tenants and tenant users. Resolves the tenant named
//! by `X-Tenant-Slug` on every request and serves CRUD over the tenant
//! service.

pub mod config;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

use std::net::SocketAddr;

use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;

use tenant_service_lib::infra::Database;
use tenant_service_lib::service::Services;

use crate::config::GatewayConfig;
use crate::routes::{cors_layer, create_router};
use crate::state::AppState;

pub use tenant_service_lib::{run_migrations, MigrateAction};

/// Build the full application: routes, tenant resolver, tracing and CORS.
pub fn create_app(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors_allowed_origins);

    create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Connect to the database, apply migrations and serve HTTP until the
/// process is stopped.
pub async fn run_server(config: GatewayConfig) -> Result<(), Box<dyn std::error::Error>> {
    // Initialize database
    let db = Database::connect(&config.database).await?;

    // Wire services and state
    let services = Services::from_connection(db.get_connection());
    let state = AppState::new(&services, config.clone());

    let app = create_app(state);

    // Build address
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!("Gateway listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
