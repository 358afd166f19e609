use chrono::{TimeZone, Utc};
use tracing::warn;

use crate::domain::diagnosis::entities::{Diagnosis, RiskLevel};
use crate::entity::diagnoses::Model as DiagnosisModel;

/// The symptom list is stored as a JSON array in a TEXT column so the
/// submission order survives the round trip.
pub(crate) fn encode_symptom_list(symptoms: &[String]) -> String {
    serde_json::to_string(symptoms).unwrap_or_else(|_| "[]".to_string())
}

pub(crate) fn decode_symptom_list(raw: &str) -> Vec<String> {
    serde_json::from_str(raw).unwrap_or_else(|e| {
        warn!("malformed gejala_terpilih payload: {}", e);
        Vec::new()
    })
}

pub(crate) fn decode_risk_level(raw: &str, row_id: i32) -> RiskLevel {
    RiskLevel::from_str_opt(raw).unwrap_or_else(|| {
        warn!(
            "unrecognized tingkat_risiko in diagnoses row {}: {}",
            row_id, raw
        );
        RiskLevel::Rendah
    })
}

impl From<DiagnosisModel> for Diagnosis {
    fn from(model: DiagnosisModel) -> Self {
        Diagnosis {
            id: model.id,
            user_id: model.user_id,
            skor_akhir: model.skor_akhir,
            tingkat_risiko: decode_risk_level(&model.tingkat_risiko, model.id),
            gejala_terpilih: decode_symptom_list(&model.gejala_terpilih),
            created_at: Utc.from_utc_datetime(&model.created_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symptom_list_round_trips_in_submission_order() {
        let symptoms = vec![
            "G003".to_string(),
            "G001".to_string(),
            "G005".to_string(),
        ];
        let encoded = encode_symptom_list(&symptoms);
        assert_eq!(decode_symptom_list(&encoded), symptoms);
    }

    #[test]
    fn empty_list_encodes_to_empty_json_array() {
        assert_eq!(encode_symptom_list(&[]), "[]");
        assert!(decode_symptom_list("[]").is_empty());
    }

    #[test]
    fn malformed_payload_decodes_to_empty_list() {
        assert!(decode_symptom_list("not json").is_empty());
    }
}
