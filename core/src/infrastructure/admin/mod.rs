pub mod mappers;
pub mod repositories;

pub use repositories::admin_repository::PostgresAdminRepository;
