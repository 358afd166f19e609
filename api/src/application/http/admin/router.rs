use super::handlers::login::{__path_login, __path_login_hint, login, login_hint};
use crate::application::http::server::app_state::AppState;

use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(login, login_hint))]
pub struct AdminApiDoc;

pub fn admin_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/admin/login", state.args.server.root_path),
            post(login),
        )
        .route(
            &format!("{}/admin/login", state.args.server.root_path),
            get(login_hint),
        )
}
