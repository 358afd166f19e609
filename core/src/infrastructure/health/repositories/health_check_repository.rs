use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use tracing::error;

use crate::domain::{common::entities::app_errors::CoreError, health::ports::HealthCheckRepository};

#[derive(Debug, Clone)]
pub struct PostgresHealthCheckRepository {
    pub db: DatabaseConnection,
}

impl PostgresHealthCheckRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl HealthCheckRepository for PostgresHealthCheckRepository {
    async fn select_arithmetic(&self) -> Result<i32, CoreError> {
        let statement = Statement::from_string(
            self.db.get_database_backend(),
            "SELECT 1 + 1 AS result",
        );

        let row = self
            .db
            .query_one(statement)
            .await
            .map_err(|e| {
                error!("Database connectivity check failed: {}", e);
                CoreError::Database(e.to_string())
            })?
            .ok_or_else(|| CoreError::Database("connectivity check returned no row".to_string()))?;

        row.try_get("", "result")
            .map_err(|e| CoreError::Database(e.to_string()))
    }
}
