//! Virtue Quotient site server entry point.
//!
//! Loads configuration, picks a lead sink, and starts the Axum HTTP server
//! with graceful shutdown. A background worker sweeps idle assessment
//! sessions and is cancelled on shutdown.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tracing::info;

use vq_core::lead::{FileLeadSink, LeadSink, LogLeadSink};

use vq_server::config::ServerConfig;
use vq_server::routes;
use vq_server::state::AppState;
use vq_server::worker::session_sweep_worker;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .json()
        .init();

    info!("Virtue Quotient site starting");

    let sink = build_lead_sink(&config);
    let state = Arc::new(AppState::new(&config, sink));

    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let sweeper_handle = tokio::spawn(session_sweep_worker(
        Arc::clone(&state),
        shutdown_rx,
        config.session_scan_interval_secs,
    ));

    let app = routes::build_router(Arc::clone(&state));

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind to {}", config.bind_addr))?;

    info!(addr = %config.bind_addr, "site server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown_tx))
        .await
        .context("server error")?;

    info!("waiting for background workers to stop");
    let _ = tokio::time::timeout(Duration::from_secs(10), sweeper_handle).await;

    info!("site server stopped");
    Ok(())
}

/// File sink when `VQ_LEAD_FILE` is set, structured log otherwise.
fn build_lead_sink(config: &ServerConfig) -> Arc<dyn LeadSink> {
    match &config.lead_file {
        Some(path) => {
            info!(path = %path.display(), "appending captured leads to file");
            Arc::new(FileLeadSink::new(path))
        }
        None => {
            info!("no lead file configured, captured leads are logged only");
            Arc::new(LogLeadSink)
        }
    }
}

/// Wait for SIGINT or SIGTERM, then broadcast shutdown.
async fn shutdown_signal(shutdown_tx: watch::Sender<bool>) {
    let ctrl_c = async {
        tokio::signal::ctrl_c().await.ok();
    };

    #[cfg(unix)]
    let terminate = async {
        if let Ok(mut sig) =
            tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
        {
            sig.recv().await;
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("shutdown signal received, stopping server");
    let _ = shutdown_tx.send(true);
}
