use axum::extract::State;

use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use glukosa_core::domain::symptom::entities::Symptom;
use glukosa_core::domain::symptom::ports::SymptomService;

#[utoipa::path(
    get,
    path = "/api/symptoms",
    tag = "symptom",
    summary = "List symptoms",
    responses(
        (status = 200, body = Vec<Symptom>)
    )
)]
pub async fn get_symptoms(
    State(state): State<AppState>,
) -> Result<Response<Vec<Symptom>>, ApiError> {
    let symptoms = state
        .service
        .get_symptoms()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(symptoms))
}
