pub mod admin;
pub mod diagnoses;
pub mod recommendations;
pub mod symptoms;
pub mod users;
