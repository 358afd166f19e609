use axum::extract::State;

use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use glukosa_core::domain::user::entities::User;
use glukosa_core::domain::user::ports::UserService;

#[utoipa::path(
    get,
    path = "/api/users",
    tag = "user",
    summary = "List users",
    description = "Returns every user row; no pagination, an empty table yields an empty array.",
    responses(
        (status = 200, body = Vec<User>)
    )
)]
pub async fn get_users(State(state): State<AppState>) -> Result<Response<Vec<User>>, ApiError> {
    let users = state.service.get_users().await.map_err(ApiError::from)?;

    Ok(Response::OK(users))
}
