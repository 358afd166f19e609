pub mod admin;
pub mod common;
pub mod diagnosis;
pub mod health;
pub mod recommendation;
pub mod stats;
pub mod symptom;
pub mod user;
