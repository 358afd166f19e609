use crate::domain::common::{GlukosaConfig, services::Service};
use crate::infrastructure::{
    admin::PostgresAdminRepository,
    db::postgres::{Postgres, PostgresConfig},
    diagnosis::PostgresDiagnosisRepository,
    health::PostgresHealthCheckRepository,
    recommendation::PostgresRecommendationRepository,
    stats::PostgresStatsRepository,
    symptom::PostgresSymptomRepository,
    user::PostgresUserRepository,
};

pub type GlukosaService = Service<
    PostgresAdminRepository,
    PostgresUserRepository,
    PostgresSymptomRepository,
    PostgresDiagnosisRepository,
    PostgresRecommendationRepository,
    PostgresStatsRepository,
    PostgresHealthCheckRepository,
>;

pub async fn create_service(config: GlukosaConfig) -> Result<GlukosaService, anyhow::Error> {
    let postgres = Postgres::new(PostgresConfig {
        database_url: config.database.connection_url(),
    })
    .await?;
    let db = postgres.get_db();

    Ok(Service::new(
        PostgresAdminRepository::new(db.clone()),
        PostgresUserRepository::new(db.clone()),
        PostgresSymptomRepository::new(db.clone()),
        PostgresDiagnosisRepository::new(db.clone()),
        PostgresRecommendationRepository::new(db.clone()),
        PostgresStatsRepository::new(db.clone()),
        PostgresHealthCheckRepository::new(db),
    ))
}
