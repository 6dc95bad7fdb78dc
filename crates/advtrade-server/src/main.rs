//! Tool server entry point.

use std::sync::Arc;

use advtrade_exchange::ExchangeClient;
use advtrade_server::{create_router, AppConfig, AppState};
use anyhow::Result;
use clap::Parser;
use tracing::info;

/// Coinbase Advanced Trade agent-tool server
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Configuration file path (can also be set via ADVTRADE_CONFIG env var)
    #[arg(short, long)]
    config: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = AppConfig::load(args.config.as_deref())?;
    advtrade_server::logging::init_logging(&config.log_level);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        sandbox = config.exchange.sandbox,
        max_requests_per_minute = config.max_requests_per_minute,
        "Starting advtrade tool server"
    );

    // One shared facade for every tool; credentials may legitimately be
    // absent, in which case tools report the unconfigured state.
    let exchange = Arc::new(ExchangeClient::new(
        config.credentials(),
        config.client_config(),
    )?);

    let router = create_router(AppState::new(exchange));

    let addr = config.bind_addr();
    info!(%addr, "Listening");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutting down advtrade tool server");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install shutdown handler");
    }
}
