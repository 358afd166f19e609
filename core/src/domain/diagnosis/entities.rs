use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Risk band derived from the score thresholds 40/70.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum RiskLevel {
    #[serde(rename = "Rendah")]
    Rendah,
    #[serde(rename = "Sedang")]
    Sedang,
    #[serde(rename = "Tinggi")]
    Tinggi,
}

impl RiskLevel {
    /// Not a medical algorithm; the thresholds are part of the API contract
    /// and must not be tuned.
    pub fn from_score(score: f64) -> Self {
        if score > 70.0 {
            RiskLevel::Tinggi
        } else if score > 40.0 {
            RiskLevel::Sedang
        } else {
            RiskLevel::Rendah
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Rendah => "Rendah",
            RiskLevel::Sedang => "Sedang",
            RiskLevel::Tinggi => "Tinggi",
        }
    }

    pub fn from_str_opt(value: &str) -> Option<Self> {
        match value {
            "Rendah" => Some(RiskLevel::Rendah),
            "Sedang" => Some(RiskLevel::Sedang),
            "Tinggi" => Some(RiskLevel::Tinggi),
            _ => None,
        }
    }

    /// Static advice text returned by the diagnosis endpoint. The endpoint
    /// never consults the recommendations table here; see DESIGN.md.
    pub fn static_recommendation(&self) -> &'static str {
        match self {
            RiskLevel::Rendah => "Pertahankan pola makan sehat dan rutin berolahraga",
            RiskLevel::Sedang => "Periksa gula darah rutin dan konsultasi dengan dokter",
            RiskLevel::Tinggi => {
                "Segera konsultasi dengan dokter spesialis dan lakukan pemeriksaan lengkap"
            }
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Diagnosis {
    pub id: i32,
    pub user_id: Option<i32>,
    pub skor_akhir: f64,
    pub tingkat_risiko: RiskLevel,
    /// Submitted symptom codes, in submission order.
    pub gejala_terpilih: Vec<String>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_bands_follow_the_fixed_thresholds() {
        assert_eq!(RiskLevel::from_score(0.0), RiskLevel::Rendah);
        assert_eq!(RiskLevel::from_score(40.0), RiskLevel::Rendah);
        assert_eq!(RiskLevel::from_score(60.0), RiskLevel::Sedang);
        assert_eq!(RiskLevel::from_score(70.0), RiskLevel::Sedang);
        assert_eq!(RiskLevel::from_score(80.0), RiskLevel::Tinggi);
    }

    #[test]
    fn risk_level_round_trips_through_its_label() {
        for level in [RiskLevel::Rendah, RiskLevel::Sedang, RiskLevel::Tinggi] {
            assert_eq!(RiskLevel::from_str_opt(level.as_str()), Some(level));
        }
        assert_eq!(RiskLevel::from_str_opt("Parah"), None);
    }
}
