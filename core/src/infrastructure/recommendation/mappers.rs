use chrono::{TimeZone, Utc};
use tracing::warn;

use crate::domain::diagnosis::entities::RiskLevel;
use crate::domain::recommendation::entities::Recommendation;
use crate::entity::recommendations::Model as RecommendationModel;

impl From<RecommendationModel> for Recommendation {
    fn from(model: RecommendationModel) -> Self {
        let tingkat_risiko = RiskLevel::from_str_opt(&model.tingkat_risiko).unwrap_or_else(|| {
            warn!(
                "unrecognized tingkat_risiko in recommendations row {}: {}",
                model.id, model.tingkat_risiko
            );
            RiskLevel::Rendah
        });

        Recommendation {
            id: model.id,
            tingkat_risiko,
            rekomendasi: model.rekomendasi,
            created_at: Utc.from_utc_datetime(&model.created_at),
        }
    }
}
