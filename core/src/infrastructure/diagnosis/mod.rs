pub mod mappers;
pub mod repositories;

pub use repositories::diagnosis_repository::PostgresDiagnosisRepository;
