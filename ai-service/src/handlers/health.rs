use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::dtos::StatusResponse;

/// Root status probe.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service is running", body = StatusResponse)
    ),
    tag = "Observability"
)]
pub async fn root_status() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "AI Service is running".to_string(),
    })
}

pub async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "service": "ai-service",
            "version": env!("CARGO_PKG_VERSION")
        })),
    )
}

pub async fn readiness_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "ready" })))
}
