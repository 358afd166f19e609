use axum::extract::State;

use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use glukosa_core::domain::recommendation::entities::Recommendation;
use glukosa_core::domain::recommendation::ports::RecommendationService;

#[utoipa::path(
    get,
    path = "/api/recommendations",
    tag = "recommendation",
    summary = "List recommendations",
    responses(
        (status = 200, body = Vec<Recommendation>)
    )
)]
pub async fn get_recommendations(
    State(state): State<AppState>,
) -> Result<Response<Vec<Recommendation>>, ApiError> {
    let recommendations = state
        .service
        .get_recommendations()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(recommendations))
}
