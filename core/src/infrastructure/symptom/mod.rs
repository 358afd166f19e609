pub mod mappers;
pub mod repositories;

pub use repositories::symptom_repository::PostgresSymptomRepository;
