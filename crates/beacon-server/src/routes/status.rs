//! Status routes.

use crate::state::AppState;
use axum::{extract::State, Json};
use beacon_types::{HealthStatus, RootStatus};
use std::sync::Arc;

pub async fn root(State(state): State<Arc<AppState>>) -> Json<RootStatus> {
    tracing::debug!(target: "beacon::api", "GET /");
    Json(RootStatus::new(
        state.service.version.as_str(),
        state.service.git_sha.as_str(),
    ))
}

// Hit by liveness probes on a short interval, so it only logs at trace.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthStatus> {
    tracing::trace!(target: "beacon::api", "GET /health");
    Json(HealthStatus::healthy(state.service.version.as_str()))
}
