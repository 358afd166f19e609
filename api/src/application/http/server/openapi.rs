use utoipa::OpenApi;

use crate::application::http::admin::router::AdminApiDoc;
use crate::application::http::diagnosis::router::DiagnosisApiDoc;
use crate::application::http::health::router::HealthApiDoc;
use crate::application::http::recommendation::router::RecommendationApiDoc;
use crate::application::http::stats::router::StatsApiDoc;
use crate::application::http::symptom::router::SymptomApiDoc;
use crate::application::http::user::router::UserApiDoc;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Glukosa API",
        description = "CRUD backend for a diabetes self-assessment tool"
    ),
    tags(
        (name = "admin", description = "Admin authentication"),
        (name = "user", description = "End-user records"),
        (name = "symptom", description = "Seeded symptom reference data"),
        (name = "diagnosis", description = "Risk scoring and history"),
        (name = "recommendation", description = "Seeded advice text"),
        (name = "stats", description = "Dashboard statistics"),
        (name = "health", description = "Liveness and connectivity checks"),
    )
)]
struct RootApiDoc;

pub struct ApiDoc;

impl ApiDoc {
    pub fn openapi() -> utoipa::openapi::OpenApi {
        let mut doc = RootApiDoc::openapi();
        doc.merge(AdminApiDoc::openapi());
        doc.merge(UserApiDoc::openapi());
        doc.merge(SymptomApiDoc::openapi());
        doc.merge(DiagnosisApiDoc::openapi());
        doc.merge(RecommendationApiDoc::openapi());
        doc.merge(StatsApiDoc::openapi());
        doc.merge(HealthApiDoc::openapi());
        doc
    }
}
