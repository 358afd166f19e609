use crate::domain::{
    admin::ports::AdminRepository,
    common::{entities::app_errors::CoreError, services::Service},
    diagnosis::ports::DiagnosisRepository,
    health::ports::HealthCheckRepository,
    recommendation::ports::RecommendationRepository,
    stats::ports::StatsRepository,
    symptom::ports::SymptomRepository,
    user::{
        entities::User,
        ports::{UserRepository, UserService},
    },
};

impl<A, U, S, D, R, ST, H> UserService for Service<A, U, S, D, R, ST, H>
where
    A: AdminRepository,
    U: UserRepository,
    S: SymptomRepository,
    D: DiagnosisRepository,
    R: RecommendationRepository,
    ST: StatsRepository,
    H: HealthCheckRepository,
{
    async fn get_users(&self) -> Result<Vec<User>, CoreError> {
        self.user_repository.fetch_users().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::services::test_support::mock_service;

    #[tokio::test]
    async fn get_users_on_empty_table_returns_empty_vec() {
        let mut service = mock_service();
        service
            .user_repository
            .expect_fetch_users()
            .returning(|| Box::pin(async { Ok(Vec::new()) }));

        let users = service.get_users().await.unwrap();
        assert!(users.is_empty());
    }
}
