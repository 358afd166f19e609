use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use glukosa_core::domain::health::ports::HealthCheckService;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct TestDbData {
    pub result: i32,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct TestDbResponse {
    pub status: String,
    pub data: TestDbData,
}

#[utoipa::path(
    get,
    path = "/test-db",
    tag = "health",
    summary = "Database connectivity check",
    description = "Runs SELECT 1 + 1 through the pool and reports the computed value.",
    responses(
        (status = 200, body = TestDbResponse),
        (status = 500, description = "Database unreachable")
    )
)]
pub async fn test_db(State(state): State<AppState>) -> Result<Response<TestDbResponse>, ApiError> {
    let result = state.service.test_db().await.map_err(ApiError::from)?;

    Ok(Response::OK(TestDbResponse {
        status: "ok".to_string(),
        data: TestDbData { result },
    }))
}
