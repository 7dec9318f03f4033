//! Local CORS relay.
//!
//! # Architecture Overview
//!
//! ```text
//!     Browser                ┌──────────────────────────────────────────┐
//!     ───────────────────────┼─▶ http::server ─▶ routing::classify     │
//!                            │                       │                  │
//!                            │        OPTIONS ◀──────┼──────▶ GET /proxy│
//!                            │     (CORS headers)    │                  │
//!                            │                       ▼                  │
//!                            │              relay::query (url=...)      │
//!                            │                       │                  │
//!                            │                       ▼                  │
//!     ◀──────────────────────┼── http::response ◀ relay::client ◀──────┼──── Upstream
//!      body + CORS headers   │                                          │     API
//!                            └──────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use cors_relay::config::{load_config, ConfigOverrides};
use cors_relay::lifecycle::{shutdown_signal, Shutdown};
use cors_relay::observability::init_logging;
use cors_relay::RelayServer;

#[derive(Parser)]
#[command(name = "cors-relay")]
#[command(about = "Local relay that adds CORS headers to third-party API responses", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override listener.bind_address.
    #[arg(short, long)]
    bind: Option<String>,

    /// Override observability.log_level.
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let overrides = ConfigOverrides {
        bind_address: cli.bind,
        log_level: cli.log_level,
    };
    let config = load_config(cli.config.as_deref(), &overrides)?;

    init_logging(&config.observability.log_level)?;

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!("CORS relay running on http://{}", local_addr);
    tracing::info!(
        "Usage: http://{}{}?url=<encoded_url>",
        local_addr,
        config.listener.relay_path
    );
    tracing::debug!(
        user_agent = %config.upstream.user_agent,
        timeout_secs = ?config.upstream.timeout_secs,
        content_type = %config.response.content_type,
        "Configuration loaded"
    );

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        shutdown_signal().await;
        shutdown.trigger();
    });

    let server = RelayServer::new(config)?;
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
