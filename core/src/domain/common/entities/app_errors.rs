use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum CoreError {
    #[error("Login gagal")]
    InvalidCredentials,

    #[error("{0}")]
    Validation(String),

    #[error("Endpoint tidak ditemukan")]
    NotFound,

    #[error("{0}")]
    Database(String),

    #[error("Internal server error")]
    InternalServerError,
}
