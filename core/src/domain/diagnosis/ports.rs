use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    diagnosis::{
        entities::Diagnosis,
        value_objects::{DiagnosisRecord, DiagnosisResult, NewDiagnosis, ProcessDiagnosisInput},
    },
};

pub trait DiagnosisService: Send + Sync {
    fn process_diagnosis(
        &self,
        input: ProcessDiagnosisInput,
    ) -> impl Future<Output = Result<DiagnosisResult, CoreError>> + Send;

    fn get_diagnoses(
        &self,
    ) -> impl Future<Output = Result<Vec<DiagnosisRecord>, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait DiagnosisRepository: Send + Sync {
    fn create_diagnosis(
        &self,
        diagnosis: NewDiagnosis,
    ) -> impl Future<Output = Result<Diagnosis, CoreError>> + Send;

    fn fetch_diagnoses(
        &self,
    ) -> impl Future<Output = Result<Vec<DiagnosisRecord>, CoreError>> + Send;
}
