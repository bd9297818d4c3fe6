//! Health check handlers

use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    pub service: String,
    pub status: String,
    pub version: String,
}

pub const SERVICE_NAME: &str = "returns-api";

/// Liveness check; the resolver has no backing store to probe
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        service: SERVICE_NAME.to_string(),
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
