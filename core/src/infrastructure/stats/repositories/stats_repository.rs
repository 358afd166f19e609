use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use tracing::error;

use crate::domain::{common::entities::app_errors::CoreError, stats::ports::StatsRepository};
use crate::entity::{diagnoses, recommendations, symptoms, users};

#[derive(Debug, Clone)]
pub struct PostgresStatsRepository {
    pub db: DatabaseConnection,
}

impl PostgresStatsRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl StatsRepository for PostgresStatsRepository {
    async fn count_users(&self) -> Result<i64, CoreError> {
        let count = users::Entity::find().count(&self.db).await.map_err(|e| {
            error!("Failed to count users: {}", e);
            CoreError::Database(e.to_string())
        })?;

        Ok(count as i64)
    }

    async fn count_diagnoses(&self) -> Result<i64, CoreError> {
        let count = diagnoses::Entity::find()
            .count(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to count diagnoses: {}", e);
                CoreError::Database(e.to_string())
            })?;

        Ok(count as i64)
    }

    async fn count_symptoms(&self) -> Result<i64, CoreError> {
        let count = symptoms::Entity::find()
            .count(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to count symptoms: {}", e);
                CoreError::Database(e.to_string())
            })?;

        Ok(count as i64)
    }

    async fn count_recommendations(&self) -> Result<i64, CoreError> {
        let count = recommendations::Entity::find()
            .count(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to count recommendations: {}", e);
                CoreError::Database(e.to_string())
            })?;

        Ok(count as i64)
    }
}
