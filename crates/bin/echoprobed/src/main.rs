//! # echoprobed — echoprobe daemon
//!
//! Composition root that reads the environment and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (`HOST`, `PORT`, `DEBUG`, `RUST_LOG`)
//! - Install the `tracing` subscriber
//! - Build the axum router
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no request handling belongs here.

mod config;

use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(config.log_filter())?)
        .init();

    tracing::info!(
        host = %config.server.host,
        port = config.server.port,
        "starting echoprobed"
    );

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    axum::serve(listener, echoprobe_adapter_http_axum::router::build())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolve once SIGINT (Ctrl-C) or, on unix, SIGTERM is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::warn!(%err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::warn!(%err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received, draining connections");
}
