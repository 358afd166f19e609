pub mod symptom_repository;
