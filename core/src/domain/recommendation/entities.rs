use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::diagnosis::entities::RiskLevel;

/// Seeded advice text, one or more rows per risk level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Recommendation {
    pub id: i32,
    pub tingkat_risiko: RiskLevel,
    pub rekomendasi: String,
    pub created_at: DateTime<Utc>,
}
