use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::diagnosis::validators::ProcessDiagnosisValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use glukosa_core::domain::diagnosis::entities::RiskLevel;
use glukosa_core::domain::diagnosis::ports::DiagnosisService;
use glukosa_core::domain::diagnosis::value_objects::{DiagnosisResult, ProcessDiagnosisInput};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ProcessDiagnosisResponse {
    pub success: bool,
    pub skor_akhir: f64,
    pub tingkat_risiko: RiskLevel,
    pub rekomendasi: String,
}

impl From<DiagnosisResult> for ProcessDiagnosisResponse {
    fn from(result: DiagnosisResult) -> Self {
        Self {
            success: true,
            skor_akhir: result.skor_akhir,
            tingkat_risiko: result.tingkat_risiko,
            rekomendasi: result.rekomendasi,
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/diagnosis/process",
    tag = "diagnosis",
    summary = "Process a diagnosis submission",
    description = "Scores the submitted symptom list (20 points per symptom, bands at 40/70) and \
                   persists a history row when user_id is present. The persistence is best-effort: \
                   an insert failure never fails the response.",
    request_body = ProcessDiagnosisValidator,
    responses(
        (status = 200, body = ProcessDiagnosisResponse)
    )
)]
pub async fn process_diagnosis(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<ProcessDiagnosisValidator>,
) -> Result<Response<ProcessDiagnosisResponse>, ApiError> {
    let result = state
        .service
        .process_diagnosis(ProcessDiagnosisInput {
            symptoms: payload.symptoms,
            user_id: payload.user_id,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ProcessDiagnosisResponse::from(result)))
}
