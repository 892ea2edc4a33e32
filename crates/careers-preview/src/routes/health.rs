//! Liveness check.

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    status: &'static str,
    service: &'static str,
    version: &'static str,
    /// CMS the service reads postings from.
    backend: String,
}

/// Report service health without touching the backend, so a CMS outage
/// does not take the service out of the load balancer.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: "careers-preview",
        version: env!("CARGO_PKG_VERSION"),
        backend: state.cms.backend_url().to_string(),
    })
}
