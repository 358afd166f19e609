use std::sync::Arc;

use clap::Parser;
use dotenv::dotenv;
use tracing::info;
use tracing_subscriber::EnvFilter;

use glukosa_api::application::http::server::http_server;
use glukosa_api::args::Args;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv().ok();
    let args = Arc::new(Args::parse());

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let state = http_server::state(Arc::clone(&args)).await?;
    let router = http_server::router(state)?;

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", args.server.port)).await?;
    info!("server listening on port {}", args.server.port);
    axum::serve(listener, router).await?;

    Ok(())
}
