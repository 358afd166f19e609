use chrono::Utc;

use crate::domain::{
    admin::ports::AdminRepository,
    common::{entities::app_errors::CoreError, services::Service},
    diagnosis::ports::DiagnosisRepository,
    health::ports::HealthCheckRepository,
    recommendation::ports::RecommendationRepository,
    stats::{
        ports::{StatsRepository, StatsService},
        value_objects::DashboardStats,
    },
    symptom::ports::SymptomRepository,
    user::ports::UserRepository,
};

impl<A, U, S, D, R, ST, H> StatsService for Service<A, U, S, D, R, ST, H>
where
    A: AdminRepository,
    U: UserRepository,
    S: SymptomRepository,
    D: DiagnosisRepository,
    R: RecommendationRepository,
    ST: StatsRepository,
    H: HealthCheckRepository,
{
    async fn get_stats(&self) -> Result<DashboardStats, CoreError> {
        // The four counts run concurrently; one failure fails the whole call
        // and the API layer degrades to a zeroed body.
        let (total_users, total_diagnoses, total_symptoms, total_recommendations) = tokio::try_join!(
            self.stats_repository.count_users(),
            self.stats_repository.count_diagnoses(),
            self.stats_repository.count_symptoms(),
            self.stats_repository.count_recommendations(),
        )?;

        Ok(DashboardStats {
            total_users,
            total_diagnoses,
            total_symptoms,
            total_recommendations,
            last_updated: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::services::test_support::mock_service;

    #[tokio::test]
    async fn stats_combine_all_four_counts() {
        let mut service = mock_service();
        service.stats_repository.expect_count_users().returning(|| Box::pin(async { Ok(15) }));
        service
            .stats_repository
            .expect_count_diagnoses()
            .returning(|| Box::pin(async { Ok(42) }));
        service
            .stats_repository
            .expect_count_symptoms()
            .returning(|| Box::pin(async { Ok(5) }));
        service
            .stats_repository
            .expect_count_recommendations()
            .returning(|| Box::pin(async { Ok(3) }));

        let stats = service.get_stats().await.unwrap();
        assert_eq!(stats.total_users, 15);
        assert_eq!(stats.total_diagnoses, 42);
        assert_eq!(stats.total_symptoms, 5);
        assert_eq!(stats.total_recommendations, 3);
    }

    #[tokio::test]
    async fn one_failing_count_fails_the_whole_call() {
        let mut service = mock_service();
        service.stats_repository.expect_count_users().returning(|| Box::pin(async { Ok(15) }));
        service
            .stats_repository
            .expect_count_diagnoses()
            .returning(|| Box::pin(async { Err(CoreError::Database("relation missing".to_string())) }));
        service
            .stats_repository
            .expect_count_symptoms()
            .returning(|| Box::pin(async { Ok(5) }));
        service
            .stats_repository
            .expect_count_recommendations()
            .returning(|| Box::pin(async { Ok(3) }));

        assert!(service.get_stats().await.is_err());
    }
}
