use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Seeded reference data; read-only at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Symptom {
    pub id: i32,
    pub kode: String,
    pub nama_gejala: String,
    pub kategori: Option<String>,
    pub created_at: DateTime<Utc>,
}
