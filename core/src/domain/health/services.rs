use crate::domain::{
    admin::ports::AdminRepository,
    common::{entities::app_errors::CoreError, services::Service},
    diagnosis::ports::DiagnosisRepository,
    health::ports::{HealthCheckRepository, HealthCheckService},
    recommendation::ports::RecommendationRepository,
    stats::ports::StatsRepository,
    symptom::ports::SymptomRepository,
    user::ports::UserRepository,
};

impl<A, U, S, D, R, ST, H> HealthCheckService for Service<A, U, S, D, R, ST, H>
where
    A: AdminRepository,
    U: UserRepository,
    S: SymptomRepository,
    D: DiagnosisRepository,
    R: RecommendationRepository,
    ST: StatsRepository,
    H: HealthCheckRepository,
{
    async fn test_db(&self) -> Result<i32, CoreError> {
        self.health_check_repository.select_arithmetic().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::services::test_support::mock_service;

    #[tokio::test]
    async fn test_db_reports_the_computed_value() {
        let mut service = mock_service();
        service
            .health_check_repository
            .expect_select_arithmetic()
            .returning(|| Box::pin(async { Ok(2) }));

        assert_eq!(service.test_db().await.unwrap(), 2);
    }
}
