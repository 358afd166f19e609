//! Standalone database bootstrap: creates the schema and seed rows, then
//! exits. Not part of the running server; safe to run repeatedly.

use clap::Parser;
use dotenv::dotenv;
use tracing::info;
use tracing_subscriber::EnvFilter;

use glukosa_api::args::Args;
use glukosa_core::domain::common::GlukosaConfig;
use glukosa_core::infrastructure::db::postgres::{Postgres, PostgresConfig};
use glukosa_core::infrastructure::db::setup;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv().ok();
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = GlukosaConfig::from(args);
    let postgres = Postgres::new(PostgresConfig {
        database_url: config.database.connection_url(),
    })
    .await?;

    setup::run(&postgres.get_db()).await?;
    info!("database setup completed");

    Ok(())
}
