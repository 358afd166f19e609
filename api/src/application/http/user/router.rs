use super::handlers::get_users::{__path_get_users, get_users};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_users))]
pub struct UserApiDoc;

pub fn user_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/api/users", state.args.server.root_path),
        get(get_users),
    )
}
