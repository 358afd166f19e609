use tracing::warn;

use crate::domain::{
    admin::ports::AdminRepository,
    common::{entities::app_errors::CoreError, services::Service},
    diagnosis::{
        entities::RiskLevel,
        ports::{DiagnosisRepository, DiagnosisService},
        value_objects::{DiagnosisRecord, DiagnosisResult, NewDiagnosis, ProcessDiagnosisInput},
    },
    health::ports::HealthCheckRepository,
    recommendation::ports::RecommendationRepository,
    stats::ports::StatsRepository,
    symptom::ports::SymptomRepository,
    user::ports::UserRepository,
};

/// Fixed multiplier of the placeholder scoring formula.
const SCORE_PER_SYMPTOM: f64 = 20.0;

impl<A, U, S, D, R, ST, H> DiagnosisService for Service<A, U, S, D, R, ST, H>
where
    A: AdminRepository,
    U: UserRepository,
    S: SymptomRepository,
    D: DiagnosisRepository,
    R: RecommendationRepository,
    ST: StatsRepository,
    H: HealthCheckRepository,
{
    async fn process_diagnosis(
        &self,
        input: ProcessDiagnosisInput,
    ) -> Result<DiagnosisResult, CoreError> {
        let skor_akhir = input.symptoms.len() as f64 * SCORE_PER_SYMPTOM;
        let tingkat_risiko = RiskLevel::from_score(skor_akhir);

        let result = DiagnosisResult {
            skor_akhir,
            tingkat_risiko,
            rekomendasi: tingkat_risiko.static_recommendation().to_string(),
        };

        // Best-effort side write: a failed insert is logged and the computed
        // result is still returned. No transaction spans score-then-insert.
        if input.user_id.is_some() {
            let write = self
                .diagnosis_repository
                .create_diagnosis(NewDiagnosis {
                    user_id: input.user_id,
                    skor_akhir,
                    tingkat_risiko,
                    gejala_terpilih: input.symptoms,
                })
                .await;
            if let Err(err) = write {
                warn!("failed to persist diagnosis: {}", err);
            }
        }

        Ok(result)
    }

    async fn get_diagnoses(&self) -> Result<Vec<DiagnosisRecord>, CoreError> {
        self.diagnosis_repository.fetch_diagnoses().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::services::test_support::mock_service;
    use crate::domain::diagnosis::entities::Diagnosis;
    use chrono::Utc;

    fn symptoms(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("G{:03}", i)).collect()
    }

    async fn score_of(n: usize) -> DiagnosisResult {
        let service = mock_service();
        service
            .process_diagnosis(ProcessDiagnosisInput {
                symptoms: symptoms(n),
                user_id: None,
            })
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn score_is_twenty_per_symptom_with_fixed_bands() {
        let cases = [
            (0, 0.0, RiskLevel::Rendah),
            (2, 40.0, RiskLevel::Rendah),
            (3, 60.0, RiskLevel::Sedang),
            (4, 80.0, RiskLevel::Tinggi),
            (6, 120.0, RiskLevel::Tinggi),
        ];
        for (n, expected_score, expected_risk) in cases {
            let result = score_of(n).await;
            assert_eq!(result.skor_akhir, expected_score, "n={n}");
            assert_eq!(result.tingkat_risiko, expected_risk, "n={n}");
        }
    }

    #[tokio::test]
    async fn recommendation_text_matches_the_risk_band() {
        let result = score_of(4).await;
        assert_eq!(
            result.rekomendasi,
            RiskLevel::Tinggi.static_recommendation()
        );
    }

    #[tokio::test]
    async fn submission_without_user_id_is_not_persisted() {
        let mut service = mock_service();
        service
            .diagnosis_repository
            .expect_create_diagnosis()
            .never();

        service
            .process_diagnosis(ProcessDiagnosisInput {
                symptoms: symptoms(3),
                user_id: None,
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn submission_with_user_id_persists_the_row() {
        let mut service = mock_service();
        service
            .diagnosis_repository
            .expect_create_diagnosis()
            .withf(|new| {
                new.user_id == Some(7)
                    && new.skor_akhir == 60.0
                    && new.tingkat_risiko == RiskLevel::Sedang
                    && new.gejala_terpilih == vec!["G001", "G002", "G003"]
            })
            .times(1)
            .returning(|new| {
                Box::pin(async move {
                    Ok(Diagnosis {
                        id: 1,
                        user_id: new.user_id,
                        skor_akhir: new.skor_akhir,
                        tingkat_risiko: new.tingkat_risiko,
                        gejala_terpilih: new.gejala_terpilih,
                        created_at: Utc::now(),
                    })
                })
            });

        service
            .process_diagnosis(ProcessDiagnosisInput {
                symptoms: symptoms(3),
                user_id: Some(7),
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn failed_side_write_does_not_change_the_result() {
        let mut service = mock_service();
        service
            .diagnosis_repository
            .expect_create_diagnosis()
            .returning(|_| Box::pin(async { Err(CoreError::Database("connection reset".to_string())) }));

        let result = service
            .process_diagnosis(ProcessDiagnosisInput {
                symptoms: symptoms(4),
                user_id: Some(1),
            })
            .await
            .unwrap();

        assert_eq!(result.skor_akhir, 80.0);
        assert_eq!(result.tingkat_risiko, RiskLevel::Tinggi);
    }
}
