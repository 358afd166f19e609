use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::admin::validators::LoginValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use glukosa_core::domain::admin::entities::Admin;
use glukosa_core::domain::admin::ports::AdminService;
use glukosa_core::domain::admin::value_objects::AuthenticateAdminInput;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct LoginResponse {
    pub success: bool,
    pub admin: Admin,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginHintResponse {
    pub message: String,
}

#[utoipa::path(
    post,
    path = "/admin/login",
    tag = "admin",
    summary = "Admin login",
    description = "Stateless credential check against the admin table. No session or token is issued.",
    request_body = LoginValidator,
    responses(
        (status = 200, body = LoginResponse),
        (status = 401, description = "Credential mismatch")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<LoginValidator>,
) -> Result<Response<LoginResponse>, ApiError> {
    let admin = state
        .service
        .authenticate_admin(AuthenticateAdminInput {
            name: payload.name,
            sandi: payload.sandi,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(LoginResponse {
        success: true,
        admin,
    }))
}

#[utoipa::path(
    get,
    path = "/admin/login",
    tag = "admin",
    summary = "Login method hint",
    responses((status = 200, body = LoginHintResponse))
)]
pub async fn login_hint() -> Response<LoginHintResponse> {
    Response::OK(LoginHintResponse {
        message: "Gunakan POST".to_string(),
    })
}
