use super::handlers::get_stats::{__path_get_stats, get_stats};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_stats))]
pub struct StatsApiDoc;

pub fn stats_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/api/stats", state.args.server.root_path),
        get(get_stats),
    )
}
