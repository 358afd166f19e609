use super::handlers::get_diagnoses::{__path_get_diagnoses, get_diagnoses};
use super::handlers::process_diagnosis::{__path_process_diagnosis, process_diagnosis};
use crate::application::http::server::app_state::AppState;

use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(process_diagnosis, get_diagnoses))]
pub struct DiagnosisApiDoc;

pub fn diagnosis_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/api/diagnosis/process", state.args.server.root_path),
            post(process_diagnosis),
        )
        .route(
            &format!("{}/api/diagnoses", state.args.server.root_path),
            get(get_diagnoses),
        )
}
