pub mod postgres;
pub mod setup;
