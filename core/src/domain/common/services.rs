/// Aggregate service owning one repository per domain. Handlers receive it
/// through the application state instead of reaching for process-wide
/// singletons, so every repository can be swapped for a test double.
#[derive(Debug, Clone)]
pub struct Service<A, U, S, D, R, ST, H> {
    pub(crate) admin_repository: A,
    pub(crate) user_repository: U,
    pub(crate) symptom_repository: S,
    pub(crate) diagnosis_repository: D,
    pub(crate) recommendation_repository: R,
    pub(crate) stats_repository: ST,
    pub(crate) health_check_repository: H,
}

impl<A, U, S, D, R, ST, H> Service<A, U, S, D, R, ST, H> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        admin_repository: A,
        user_repository: U,
        symptom_repository: S,
        diagnosis_repository: D,
        recommendation_repository: R,
        stats_repository: ST,
        health_check_repository: H,
    ) -> Self {
        Self {
            admin_repository,
            user_repository,
            symptom_repository,
            diagnosis_repository,
            recommendation_repository,
            stats_repository,
            health_check_repository,
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::Service;
    use crate::domain::admin::ports::MockAdminRepository;
    use crate::domain::diagnosis::ports::MockDiagnosisRepository;
    use crate::domain::health::ports::MockHealthCheckRepository;
    use crate::domain::recommendation::ports::MockRecommendationRepository;
    use crate::domain::stats::ports::MockStatsRepository;
    use crate::domain::symptom::ports::MockSymptomRepository;
    use crate::domain::user::ports::MockUserRepository;

    pub(crate) type MockService = Service<
        MockAdminRepository,
        MockUserRepository,
        MockSymptomRepository,
        MockDiagnosisRepository,
        MockRecommendationRepository,
        MockStatsRepository,
        MockHealthCheckRepository,
    >;

    pub(crate) fn mock_service() -> MockService {
        Service::new(
            MockAdminRepository::new(),
            MockUserRepository::new(),
            MockSymptomRepository::new(),
            MockDiagnosisRepository::new(),
            MockRecommendationRepository::new(),
            MockStatsRepository::new(),
            MockHealthCheckRepository::new(),
        )
    }
}
