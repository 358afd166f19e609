use axum::extract::State;

use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use glukosa_core::domain::diagnosis::ports::DiagnosisService;
use glukosa_core::domain::diagnosis::value_objects::DiagnosisRecord;

#[utoipa::path(
    get,
    path = "/api/diagnoses",
    tag = "diagnosis",
    summary = "List diagnosis history",
    description = "Every recorded diagnosis, newest first, left-joined with the user's name. \
                   Rows whose user was deleted keep a null nama_lengkap.",
    responses(
        (status = 200, body = Vec<DiagnosisRecord>)
    )
)]
pub async fn get_diagnoses(
    State(state): State<AppState>,
) -> Result<Response<Vec<DiagnosisRecord>>, ApiError> {
    let diagnoses = state
        .service
        .get_diagnoses()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(diagnoses))
}
