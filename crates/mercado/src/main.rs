//! Mercado API server
//!
//! A versioned RESTful product API with content negotiation, webhooks
//! and bearer-token authentication, backed by an in-memory store.

use clap::Parser;
use mercado_rest::{ServerConfig, create_app_with_config, init_logging};
use mercado_store::{MemoryStore, ProductStore};
use tracing::info;

/// Starts the Axum HTTP server.
async fn serve(app: axum::Router, config: &ServerConfig) -> anyhow::Result<()> {
    let addr = config.socket_addr();
    info!(address = %addr, "Server listening");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();
    init_logging(&config.log_level);

    if let Err(errors) = config.validate() {
        for error in &errors {
            eprintln!("Configuration error: {}", error);
        }
        std::process::exit(1);
    }

    let store = if config.seed_demo {
        MemoryStore::with_seed()
    } else {
        MemoryStore::new()
    };

    info!(
        port = config.port,
        host = %config.host,
        backend = store.backend_name(),
        seeded = config.seed_demo,
        "Starting Mercado API server"
    );

    let app = create_app_with_config(store, config.clone());
    serve(app, &config).await
}
