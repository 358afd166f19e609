use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::diagnosis::entities::RiskLevel;

#[derive(Debug, Clone)]
pub struct ProcessDiagnosisInput {
    pub symptoms: Vec<String>,
    pub user_id: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DiagnosisResult {
    pub skor_akhir: f64,
    pub tingkat_risiko: RiskLevel,
    pub rekomendasi: String,
}

/// Row to persist when a submission carries a user id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewDiagnosis {
    pub user_id: Option<i32>,
    pub skor_akhir: f64,
    pub tingkat_risiko: RiskLevel,
    pub gejala_terpilih: Vec<String>,
}

/// Listing row: a diagnosis left-joined with the owning user's name. The name
/// is null when the user has been deleted; the row itself is kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DiagnosisRecord {
    pub id: i32,
    pub user_id: Option<i32>,
    pub nama_lengkap: Option<String>,
    pub skor_akhir: f64,
    pub tingkat_risiko: RiskLevel,
    pub gejala_terpilih: Vec<String>,
    pub created_at: DateTime<Utc>,
}
