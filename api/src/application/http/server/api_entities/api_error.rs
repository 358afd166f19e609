use axum::Json;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use utoipa::ToSchema;
use validator::Validate;

use glukosa_core::domain::common::entities::app_errors::CoreError;

#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("Login gagal")]
    Unauthorized,

    #[error("{0}")]
    Validation(String),

    #[error("Endpoint tidak ditemukan")]
    NotFound,

    #[error("{0}")]
    Database(String),

    #[error("Internal server error")]
    Internal,
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::InvalidCredentials => ApiError::Unauthorized,
            CoreError::Validation(message) => ApiError::Validation(message),
            CoreError::NotFound => ApiError::NotFound,
            CoreError::Database(message) => ApiError::Database(message),
            CoreError::InternalServerError => ApiError::Internal,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, body) = match self {
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                ApiErrorBody {
                    error: "Login gagal".to_string(),
                    message: None,
                },
            ),
            ApiError::Validation(message) => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    error: message,
                    message: None,
                },
            ),
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                ApiErrorBody {
                    error: "Endpoint tidak ditemukan".to_string(),
                    message: None,
                },
            ),
            // The driver message is surfaced for diagnostics; this is an
            // internal tool, see DESIGN.md.
            ApiError::Database(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorBody {
                    error: "Terjadi kesalahan pada server".to_string(),
                    message: Some(message),
                },
            ),
            ApiError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorBody {
                    error: "Terjadi kesalahan pada server".to_string(),
                    message: None,
                },
            ),
        };

        (status, Json(body)).into_response()
    }
}

/// JSON extractor that rejects malformed bodies and failed `validator` rules
/// with a 400 `ApiError` instead of axum's plain-text rejection.
pub struct ValidateJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidateJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::Validation(rejection.body_text()))?;

        value
            .validate()
            .map_err(|errors| ApiError::Validation(errors.to_string()))?;

        Ok(ValidateJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unauthorized_maps_to_401_with_the_canonical_body() {
        let response = ApiError::Unauthorized.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, serde_json::json!({ "error": "Login gagal" }));
    }

    #[tokio::test]
    async fn not_found_maps_to_404_with_the_canonical_body() {
        let response = ApiError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "error": "Endpoint tidak ditemukan" })
        );
    }

    #[tokio::test]
    async fn database_errors_surface_the_driver_message() {
        let response =
            ApiError::Database("connection refused".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["message"], "connection refused");
    }
}
