//! Service description and health handlers: `GET /` and `GET /health`.

use axum::{extract::State, Json};
use puml_ld_server_api::{HealthResponse, ServiceInfo};

use super::AppState;

/// `GET /`
///
/// Static description of the service and its endpoints.
pub async fn root(State(state): State<AppState>) -> Json<ServiceInfo> {
    Json(ServiceInfo::new(&state.config.name, env!("CARGO_PKG_VERSION")))
}

/// `GET /health`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok(chrono::Utc::now().to_rfc3339()))
}
