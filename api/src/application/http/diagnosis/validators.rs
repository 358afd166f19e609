use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// A missing `symptoms` field defaults to an empty list and scores zero.
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct ProcessDiagnosisValidator {
    #[serde(default)]
    pub symptoms: Vec<String>,

    #[serde(default)]
    pub user_id: Option<i32>,
}
