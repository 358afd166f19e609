use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Live row counts for the dashboard; never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DashboardStats {
    pub total_users: i64,
    pub total_diagnoses: i64,
    pub total_symptoms: i64,
    pub total_recommendations: i64,
    pub last_updated: DateTime<Utc>,
}
