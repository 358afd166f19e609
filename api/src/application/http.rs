pub mod admin;
pub mod diagnosis;
pub mod health;
pub mod recommendation;
pub mod server;
pub mod stats;
pub mod symptom;
pub mod user;
