use chrono::{NaiveDateTime, TimeZone, Utc};
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{ConnectionTrait, DatabaseConnection, EntityTrait, Statement};
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    diagnosis::{
        entities::Diagnosis,
        ports::DiagnosisRepository,
        value_objects::{DiagnosisRecord, NewDiagnosis},
    },
};
use crate::entity::diagnoses::{ActiveModel as DiagnosisActiveModel, Entity as DiagnosisEntity};
use crate::infrastructure::diagnosis::mappers::{
    decode_risk_level, decode_symptom_list, encode_symptom_list,
};

#[derive(Debug, Clone)]
pub struct PostgresDiagnosisRepository {
    pub db: DatabaseConnection,
}

impl PostgresDiagnosisRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl DiagnosisRepository for PostgresDiagnosisRepository {
    async fn create_diagnosis(&self, diagnosis: NewDiagnosis) -> Result<Diagnosis, CoreError> {
        let created = DiagnosisEntity::insert(DiagnosisActiveModel {
            id: NotSet,
            user_id: Set(diagnosis.user_id),
            skor_akhir: Set(diagnosis.skor_akhir),
            tingkat_risiko: Set(diagnosis.tingkat_risiko.as_str().to_string()),
            gejala_terpilih: Set(encode_symptom_list(&diagnosis.gejala_terpilih)),
            created_at: Set(Utc::now().naive_utc()),
        })
        .exec_with_returning(&self.db)
        .await
        .map(Diagnosis::from)
        .map_err(|e| {
            error!("Failed to create diagnosis: {}", e);
            CoreError::Database(e.to_string())
        })?;

        Ok(created)
    }

    async fn fetch_diagnoses(&self) -> Result<Vec<DiagnosisRecord>, CoreError> {
        // Left join so rows survive user deletion with a null name.
        let statement = Statement::from_string(
            self.db.get_database_backend(),
            r#"
            SELECT d.id, d.user_id, u.nama_lengkap, d.skor_akhir,
                   d.tingkat_risiko, d.gejala_terpilih, d.created_at
            FROM diagnoses d
            LEFT JOIN users u ON u.id = d.user_id
            ORDER BY d.created_at DESC
            "#,
        );

        let rows = self.db.query_all(statement).await.map_err(|e| {
            error!("Failed to fetch diagnoses: {}", e);
            CoreError::Database(e.to_string())
        })?;

        let mut records = Vec::with_capacity(rows.len());
        for row in rows {
            let id: i32 = row
                .try_get("", "id")
                .map_err(|e| CoreError::Database(e.to_string()))?;
            let tingkat_risiko: String = row
                .try_get("", "tingkat_risiko")
                .map_err(|e| CoreError::Database(e.to_string()))?;
            let gejala_terpilih: String = row
                .try_get("", "gejala_terpilih")
                .map_err(|e| CoreError::Database(e.to_string()))?;
            let created_at: NaiveDateTime = row
                .try_get("", "created_at")
                .map_err(|e| CoreError::Database(e.to_string()))?;

            records.push(DiagnosisRecord {
                id,
                user_id: row
                    .try_get("", "user_id")
                    .map_err(|e| CoreError::Database(e.to_string()))?,
                nama_lengkap: row
                    .try_get("", "nama_lengkap")
                    .map_err(|e| CoreError::Database(e.to_string()))?,
                skor_akhir: row
                    .try_get("", "skor_akhir")
                    .map_err(|e| CoreError::Database(e.to_string()))?,
                tingkat_risiko: decode_risk_level(&tingkat_risiko, id),
                gejala_terpilih: decode_symptom_list(&gejala_terpilih),
                created_at: Utc.from_utc_datetime(&created_at),
            });
        }

        Ok(records)
    }
}
