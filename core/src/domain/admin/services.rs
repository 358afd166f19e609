use crate::domain::{
    admin::{
        entities::Admin,
        ports::{AdminRepository, AdminService},
        value_objects::AuthenticateAdminInput,
    },
    common::{entities::app_errors::CoreError, services::Service},
    diagnosis::ports::DiagnosisRepository,
    health::ports::HealthCheckRepository,
    recommendation::ports::RecommendationRepository,
    stats::ports::StatsRepository,
    symptom::ports::SymptomRepository,
    user::ports::UserRepository,
};

impl<A, U, S, D, R, ST, H> AdminService for Service<A, U, S, D, R, ST, H>
where
    A: AdminRepository,
    U: UserRepository,
    S: SymptomRepository,
    D: DiagnosisRepository,
    R: RecommendationRepository,
    ST: StatsRepository,
    H: HealthCheckRepository,
{
    async fn authenticate_admin(&self, input: AuthenticateAdminInput) -> Result<Admin, CoreError> {
        self.admin_repository
            .find_by_credentials(input.name, input.sandi)
            .await?
            .ok_or(CoreError::InvalidCredentials)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::services::test_support::mock_service;
    use chrono::Utc;
    use mockall::predicate::eq;

    fn stored_admin() -> Admin {
        Admin {
            id: 1,
            name: "admin".to_string(),
            sandi: "admin123".to_string(),
            nama_lengkap: Some("Administrator".to_string()),
            email: Some("admin@diabetes.com".to_string()),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn authenticate_with_matching_credentials_returns_admin() {
        let mut service = mock_service();
        service
            .admin_repository
            .expect_find_by_credentials()
            .with(eq("admin".to_string()), eq("admin123".to_string()))
            .returning(|_, _| Box::pin(async { Ok(Some(stored_admin())) }));

        let admin = service
            .authenticate_admin(AuthenticateAdminInput {
                name: "admin".to_string(),
                sandi: "admin123".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(admin.name, "admin");
    }

    #[tokio::test]
    async fn authenticate_with_wrong_sandi_is_unauthorized() {
        let mut service = mock_service();
        // The repository matches on exact name AND sandi, so a wrong sandi
        // yields zero rows even though an "admin" row exists.
        service
            .admin_repository
            .expect_find_by_credentials()
            .returning(|_, _| Box::pin(async { Ok(None) }));

        let result = service
            .authenticate_admin(AuthenticateAdminInput {
                name: "admin".to_string(),
                sandi: "wrong".to_string(),
            })
            .await;

        assert!(matches!(result, Err(CoreError::InvalidCredentials)));
    }
}
