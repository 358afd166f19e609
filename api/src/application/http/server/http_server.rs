use std::path::Path;
use std::sync::Arc;

use crate::application::http::admin::router::admin_routes;
use crate::application::http::diagnosis::router::diagnosis_routes;
use crate::application::http::health::router::health_routes;
use crate::application::http::recommendation::router::recommendation_routes;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::app_state::AppState;
use crate::application::http::server::openapi::ApiDoc;
use crate::application::http::stats::router::stats_routes;
use crate::application::http::symptom::router::symptom_routes;
use crate::application::http::user::router::user_routes;
use crate::args::Args;

use axum::Router;
use axum::handler::HandlerWithoutStateExt;
use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE, LOCATION};
use axum::http::{HeaderValue, Method};
use axum::routing::get;
use axum_prometheus::PrometheusMetricLayer;
use glukosa_core::application::create_service;
use glukosa_core::domain::common::GlukosaConfig;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tracing::{debug, info, info_span};
use utoipa_rapidoc::RapiDoc;
use utoipa_redoc::{Redoc, Servable};
use utoipa_scalar::{Scalar, Servable as ScalarServable};
use utoipa_swagger_ui::SwaggerUi;

pub async fn state(args: Arc<Args>) -> Result<AppState, anyhow::Error> {
    let config = GlukosaConfig::from(args.as_ref().clone());
    let service = create_service(config).await?;

    Ok(AppState::new(args, service))
}

async fn index() -> &'static str {
    "Diabetes Diagnosis API is running"
}

async fn not_found() -> ApiError {
    ApiError::NotFound
}

/// Unmatched GETs fall through to the prebuilt frontend when it exists;
/// everything else, non-GET methods included, gets the canonical JSON 404.
/// `ServeDir` would otherwise answer non-GET/HEAD with an empty 405.
fn with_static_fallback<S>(router: Router<S>, static_dir: &str) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    if Path::new(static_dir).exists() {
        info!("serving static assets from {}", static_dir);
        router.fallback_service(
            ServeDir::new(static_dir)
                .call_fallback_on_method_not_allowed(true)
                .not_found_service(not_found.into_service()),
        )
    } else {
        router.fallback(not_found)
    }
}

///  Returns the [`Router`] of this application.
pub fn router(state: AppState) -> Result<Router, anyhow::Error> {
    let trace_layer = tower_http::trace::TraceLayer::new_for_http().make_span_with(
        |request: &axum::extract::Request| {
            let uri: String = request.uri().to_string();
            info_span!("http_request", method = ?request.method(), uri)
        },
    );

    let allowed_origins = state
        .args
        .server
        .allowed_origins
        .iter()
        .map(|origin| HeaderValue::from_str(origin).unwrap())
        .collect::<Vec<HeaderValue>>();

    debug!("Allowed origins: {:?}", allowed_origins);

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_origin(allowed_origins)
        .allow_headers([
            AUTHORIZATION,
            CONTENT_TYPE,
            CONTENT_LENGTH,
            ACCEPT,
            LOCATION,
        ])
        .allow_credentials(true);

    let (prometheus_layer, metric_handle) = PrometheusMetricLayer::pair();

    let mut openapi = ApiDoc::openapi();
    let mut paths = openapi.paths.clone();
    paths.paths = openapi
        .paths
        .paths
        .into_iter()
        .map(|(path, item)| (format!("{}{path}", state.args.server.root_path), item))
        .collect();
    openapi.paths = paths;

    let root_path = state.args.server.root_path.clone();
    let api_docs_url = format!("{}/api-docs/openapi.json", root_path);

    let router = axum::Router::new()
        .merge(Scalar::with_url(
            format!("{}/scalar", root_path),
            openapi.clone(),
        ))
        .merge(
            SwaggerUi::new(format!("{}/swagger-ui", root_path))
                .url(api_docs_url.clone(), openapi.clone()),
        )
        .merge(Redoc::with_url(format!("{}/redoc", root_path), openapi))
        .merge(RapiDoc::new(api_docs_url).path(format!("{}/rapidoc", root_path)))
        .route(&format!("{}/", root_path), get(index))
        .merge(admin_routes(state.clone()))
        .merge(user_routes(state.clone()))
        .merge(symptom_routes(state.clone()))
        .merge(diagnosis_routes(state.clone()))
        .merge(recommendation_routes(state.clone()))
        .merge(stats_routes(state.clone()))
        .merge(health_routes(state.clone()))
        .route(
            &format!("{}/metrics", root_path),
            get(|| async move { metric_handle.render() }),
        );

    let static_dir = state.args.server.static_dir.clone();
    let router = with_static_fallback(router, &static_dir);

    let router = router
        .layer(trace_layer)
        .layer(cors)
        .layer(prometheus_layer)
        .with_state(state);
    Ok(router)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn unmatched_post_gets_the_json_404_when_static_dir_exists() {
        let static_dir = std::env::temp_dir();
        let router = with_static_fallback(Router::new(), static_dir.to_str().unwrap());

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/no/such/route")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "error": "Endpoint tidak ditemukan" })
        );
    }

    #[tokio::test]
    async fn missing_file_gets_the_json_404_when_static_dir_exists() {
        let static_dir = std::env::temp_dir();
        let router = with_static_fallback(Router::new(), static_dir.to_str().unwrap());

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/no-such-file.html")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "error": "Endpoint tidak ditemukan" })
        );
    }

    #[tokio::test]
    async fn unmatched_request_gets_the_json_404_without_a_static_dir() {
        let router = with_static_fallback(Router::new(), "./no-such-static-dir");

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/no/such/route")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "error": "Endpoint tidak ditemukan" })
        );
    }
}
