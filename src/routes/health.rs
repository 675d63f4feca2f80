use axum::{response::IntoResponse, Json};
use utoipa::OpenApi;

use crate::models::dto::{HealthStatus, ServiceInfo};

#[derive(OpenApi)]
#[openapi(paths(index_handler, health_checker_handler))]
/// Defines the OpenAPI spec for the service root and health endpoints
pub struct HealthApi;

#[utoipa::path(
    get,
    path = "/",
    tag = "HEALTH",
    responses(
        (status = 200, description = "Service metadata", body = ServiceInfo)
    )
)]
pub async fn index_handler() -> impl IntoResponse {
    Json(ServiceInfo {
        name: "Account REST API Service".to_string(),
        version: "1.0".to_string(),
    })
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "HEALTH",
    responses(
        (status = 200, description = "Service is alive", body = HealthStatus)
    )
)]
pub async fn health_checker_handler() -> impl IntoResponse {
    Json(HealthStatus {
        status: "OK".to_string(),
    })
}
