//! Gateway configuration.

use std::env;

use common::{parse_flag, DatabaseConfig};

/// Gateway configuration.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Database connection settings
    pub database: DatabaseConfig,
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Origins allowed by CORS; empty means any origin
    pub cors_allowed_origins: Vec<String>,
    /// Reject requests whose `X-Tenant-Slug` names no known tenant
    pub require_known_tenant: bool,
}

impl GatewayConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            database: DatabaseConfig::from_env(),
            host: env::var("GATEWAY_HOST")
                .or_else(|_| env::var("SERVER_HOST"))
                .unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("GATEWAY_PORT")
                .or_else(|_| env::var("SERVER_PORT"))
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .map(|origins| parse_origins(&origins))
                .unwrap_or_default(),
            require_known_tenant: env::var("REQUIRE_KNOWN_TENANT")
                .ok()
                .and_then(|v| parse_flag(&v))
                .unwrap_or(false),
        }
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            database: DatabaseConfig::default(),
            host: "0.0.0.0".to_string(),
            port: 3000,
            cors_allowed_origins: Vec::new(),
            require_known_tenant: false,
        }
    }
}

/// Split a comma-separated origin list, dropping blanks.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}
