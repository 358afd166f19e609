use crate::domain::{
    admin::ports::AdminRepository,
    common::{entities::app_errors::CoreError, services::Service},
    diagnosis::ports::DiagnosisRepository,
    health::ports::HealthCheckRepository,
    recommendation::ports::RecommendationRepository,
    stats::ports::StatsRepository,
    symptom::{
        entities::Symptom,
        ports::{SymptomRepository, SymptomService},
    },
    user::ports::UserRepository,
};

impl<A, U, S, D, R, ST, H> SymptomService for Service<A, U, S, D, R, ST, H>
where
    A: AdminRepository,
    U: UserRepository,
    S: SymptomRepository,
    D: DiagnosisRepository,
    R: RecommendationRepository,
    ST: StatsRepository,
    H: HealthCheckRepository,
{
    async fn get_symptoms(&self) -> Result<Vec<Symptom>, CoreError> {
        self.symptom_repository.fetch_symptoms().await
    }
}
