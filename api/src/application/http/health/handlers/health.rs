use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::api_entities::response::Response;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    summary = "Liveness probe",
    description = "Static payload; touches neither the database nor any business table.",
    responses((status = 200, body = HealthResponse))
)]
pub async fn health() -> Response<HealthResponse> {
    Response::OK(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now(),
    })
}
