use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recommendation::{entities::Recommendation, ports::RecommendationRepository},
};
use crate::entity::recommendations::{
    Column as RecommendationColumn, Entity as RecommendationEntity,
};

#[derive(Debug, Clone)]
pub struct PostgresRecommendationRepository {
    pub db: DatabaseConnection,
}

impl PostgresRecommendationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl RecommendationRepository for PostgresRecommendationRepository {
    async fn fetch_recommendations(&self) -> Result<Vec<Recommendation>, CoreError> {
        let recommendations = RecommendationEntity::find()
            .order_by_asc(RecommendationColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch recommendations: {}", e);
                CoreError::Database(e.to_string())
            })?
            .into_iter()
            .map(Recommendation::from)
            .collect();

        Ok(recommendations)
    }
}
