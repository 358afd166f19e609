use crate::domain::{
    admin::ports::AdminRepository,
    common::{entities::app_errors::CoreError, services::Service},
    diagnosis::ports::DiagnosisRepository,
    health::ports::HealthCheckRepository,
    recommendation::{
        entities::Recommendation,
        ports::{RecommendationRepository, RecommendationService},
    },
    stats::ports::StatsRepository,
    symptom::ports::SymptomRepository,
    user::ports::UserRepository,
};

impl<A, U, S, D, R, ST, H> RecommendationService for Service<A, U, S, D, R, ST, H>
where
    A: AdminRepository,
    U: UserRepository,
    S: SymptomRepository,
    D: DiagnosisRepository,
    R: RecommendationRepository,
    ST: StatsRepository,
    H: HealthCheckRepository,
{
    async fn get_recommendations(&self) -> Result<Vec<Recommendation>, CoreError> {
        self.recommendation_repository.fetch_recommendations().await
    }
}
