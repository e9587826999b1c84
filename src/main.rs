//! Cloud cars API server.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request          ┌──────────────────────────────────────────────┐
//!     ────────────────────────┼─▶ http::server (request ID, trace, limits)   │
//!                             │        │                                      │
//!                             │        ▼                                      │
//!                             │   api (route table) ──▶ validation            │
//!                             │        │                                      │
//!                             │        ▼                                      │
//!     Client Response         │   store::CarStore (in-memory, append-only)    │
//!     ◀───────────────────────┼──                                            │
//!                             │  config · observability · lifecycle           │
//!                             └──────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;

use cloud_cars::config::{load_config, validate_config, ConfigError, ServerConfig};
use cloud_cars::observability::{logging, metrics};
use cloud_cars::{CarStore, HttpServer, Shutdown};

#[derive(Parser)]
#[command(name = "cloud-cars")]
#[command(about = "In-memory cars API server", long_about = None)]
struct Args {
    /// Path to a TOML config file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener bind address (e.g. 127.0.0.1:8082).
    #[arg(short, long)]
    bind: Option<String>,

    /// Start with an empty store instead of the seed list.
    #[arg(long)]
    no_seed: bool,
}

fn resolve_config(args: &Args) -> Result<ServerConfig, ConfigError> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => ServerConfig::default(),
    };

    if let Some(bind) = &args.bind {
        config.listener.bind_address = bind.clone();
    }
    if args.no_seed {
        config.store.seed = false;
    }

    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = resolve_config(&args)?;

    logging::init_logging(&config.observability);

    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        max_body_size = config.limits.max_body_size,
        seed = config.store.seed,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(e) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                error = %e,
                "Failed to parse metrics address"
            ),
        }
    }

    let store = Arc::new(if config.store.seed {
        CarStore::seeded()
    } else {
        CarStore::new()
    });

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let port = listener.local_addr()?.port();

    tracing::info!("server running http://localhost:{}", port);
    tracing::info!("press CTRL+C to stop server");

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config, store);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
