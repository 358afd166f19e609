pub mod diagnosis_repository;
