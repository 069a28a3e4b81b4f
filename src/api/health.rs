//! Liveness endpoints

use axum::{http::StatusCode, response::IntoResponse};

use super::types::{Json, OkResponse};

/// `{ "ok": true }`, unconditionally
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(OkResponse::new()))
}

/// Bare 200 for orchestrator liveness probes
pub async fn live_check() -> impl IntoResponse {
    StatusCode::OK
}
