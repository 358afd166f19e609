use std::future::Future;

use crate::domain::{common::entities::app_errors::CoreError, symptom::entities::Symptom};

pub trait SymptomService: Send + Sync {
    fn get_symptoms(&self) -> impl Future<Output = Result<Vec<Symptom>, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait SymptomRepository: Send + Sync {
    fn fetch_symptoms(&self) -> impl Future<Output = Result<Vec<Symptom>, CoreError>> + Send;
}
