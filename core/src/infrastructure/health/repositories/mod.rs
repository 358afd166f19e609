pub mod health_check_repository;
