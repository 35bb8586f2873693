use axum::Json;
use serde::Serialize;

pub const SERVICE_NAME: &str = "dynamic-app";

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
}

pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
    })
}
