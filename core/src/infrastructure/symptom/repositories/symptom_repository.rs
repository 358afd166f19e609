use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder, Select};
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    symptom::{entities::Symptom, ports::SymptomRepository},
};
use crate::entity::symptoms::{Column as SymptomColumn, Entity as SymptomEntity};

#[derive(Debug, Clone)]
pub struct PostgresSymptomRepository {
    pub db: DatabaseConnection,
}

impl PostgresSymptomRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// Symptoms list in kode order, not insertion order.
fn list_query() -> Select<SymptomEntity> {
    SymptomEntity::find().order_by_asc(SymptomColumn::Kode)
}

impl SymptomRepository for PostgresSymptomRepository {
    async fn fetch_symptoms(&self) -> Result<Vec<Symptom>, CoreError> {
        let symptoms = list_query()
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch symptoms: {}", e);
                CoreError::Database(e.to_string())
            })?
            .into_iter()
            .map(Symptom::from)
            .collect();

        Ok(symptoms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DbBackend, QueryTrait};

    #[test]
    fn symptoms_are_ordered_by_kode() {
        let sql = list_query().build(DbBackend::Postgres).to_string();
        assert!(sql.contains(r#"ORDER BY "symptoms"."kode" ASC"#), "{sql}");
    }
}
