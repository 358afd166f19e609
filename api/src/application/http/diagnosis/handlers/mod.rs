pub mod get_diagnoses;
pub mod process_diagnosis;
