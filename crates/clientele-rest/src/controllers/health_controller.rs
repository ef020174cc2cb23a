//! Health check controller.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use futures::future::join_all;
use serde::Serialize;
use std::collections::BTreeMap;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Health status.
    pub status: String,
    /// Application version.
    pub version: String,
}

/// Result of one dependency check.
#[derive(Debug, Serialize)]
pub struct ComponentHealth {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Readiness response.
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub checks: BTreeMap<String, ComponentHealth>,
}

/// Creates the health router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        .route("/live", get(liveness_check))
}

/// Health check endpoint.
pub async fn health_check() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Readiness check endpoint. 503 when any dependency is unhealthy; a
/// degraded dependency (e.g. cache disabled) still counts as ready.
pub async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    let results = join_all(state.health_checks.iter().map(|check| async move {
        (check.name().to_string(), check.check().await)
    }))
    .await;

    let ready = results.iter().all(|(_, status)| !status.is_unhealthy());
    let checks = results
        .into_iter()
        .map(|(name, status)| {
            let health = ComponentHealth {
                status: status.label(),
                detail: status.detail().map(ToString::to_string),
            };
            (name, health)
        })
        .collect();

    let (code, status) = if ready {
        (StatusCode::OK, "ready")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "not_ready")
    };

    (code, Json(ReadinessResponse { status, checks }))
}

/// Liveness check endpoint.
pub async fn liveness_check() -> impl IntoResponse {
    StatusCode::OK
}
