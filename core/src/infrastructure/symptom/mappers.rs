use chrono::{TimeZone, Utc};

use crate::domain::symptom::entities::Symptom;
use crate::entity::symptoms::Model as SymptomModel;

impl From<SymptomModel> for Symptom {
    fn from(model: SymptomModel) -> Self {
        Symptom {
            id: model.id,
            kode: model.kode,
            nama_gejala: model.nama_gejala,
            kategori: model.kategori,
            created_at: Utc.from_utc_datetime(&model.created_at),
        }
    }
}
