use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::application::http::server::app_state::AppState;
use glukosa_core::domain::common::entities::app_errors::CoreError;
use glukosa_core::domain::stats::ports::StatsService;
use glukosa_core::domain::stats::value_objects::DashboardStats;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct StatsResponse {
    pub total_users: i64,
    pub total_diagnoses: i64,
    pub total_symptoms: i64,
    pub total_recommendations: i64,
    pub last_updated: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<DashboardStats> for StatsResponse {
    fn from(stats: DashboardStats) -> Self {
        Self {
            total_users: stats.total_users,
            total_diagnoses: stats.total_diagnoses,
            total_symptoms: stats.total_symptoms,
            total_recommendations: stats.total_recommendations,
            last_updated: stats.last_updated,
            error: None,
        }
    }
}

impl StatsResponse {
    fn zeroed(message: String) -> Self {
        Self {
            total_users: 0,
            total_diagnoses: 0,
            total_symptoms: 0,
            total_recommendations: 0,
            last_updated: Utc::now(),
            error: Some(message),
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/stats",
    tag = "stats",
    summary = "Dashboard statistics",
    description = "Live row counts, queried concurrently. A failure on any count degrades the \
                   whole response to a zeroed body with HTTP 500.",
    responses(
        (status = 200, body = StatsResponse),
        (status = 500, body = StatsResponse)
    )
)]
pub async fn get_stats(State(state): State<AppState>) -> axum::response::Response {
    match state.service.get_stats().await {
        Ok(stats) => (StatusCode::OK, Json(StatsResponse::from(stats))).into_response(),
        Err(err) => degraded(err),
    }
}

fn degraded(err: CoreError) -> axum::response::Response {
    error!("stats query failed: {}", err);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(StatsResponse::zeroed(err.to_string())),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn a_failed_count_degrades_to_a_zeroed_500_body() {
        let response = degraded(CoreError::Database("relation missing".to_string()));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["total_users"], 0);
        assert_eq!(body["total_diagnoses"], 0);
        assert_eq!(body["total_symptoms"], 0);
        assert_eq!(body["total_recommendations"], 0);
        assert_eq!(body["error"], "relation missing");
    }
}
