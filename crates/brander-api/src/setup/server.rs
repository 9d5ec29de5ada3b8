//! Listener and shutdown handling

use anyhow::{Context, Result};
use axum::Router;
use brander_core::Config;
use std::net::SocketAddr;
use tokio::net::TcpListener;

/// Bind the configured port and serve until SIGINT or SIGTERM.
///
/// In-flight branding requests are allowed to finish before the process exits.
pub async fn start_server(config: &Config, app: Router) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port()));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!(
        addr = %listener.local_addr()?,
        request_timeout_secs = config.request_timeout_secs(),
        max_body_mb = config.max_body_size_bytes() / 1024 / 1024,
        storage_backend = ?config.storage_backend(),
        bucket = %config.bucket(),
        "Brander API listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_shutdown())
        .await
        .context("HTTP server failed")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn wait_for_shutdown() {
    let signal = termination().await;
    tracing::info!(signal, "Shutdown requested, draining branding requests");
}

#[cfg(unix)]
async fn termination() -> &'static str {
    use tokio::signal::unix::{signal, SignalKind};

    match signal(SignalKind::terminate()) {
        Ok(mut sigterm) => tokio::select! {
            name = ctrl_c() => name,
            _ = sigterm.recv() => "SIGTERM",
        },
        Err(e) => {
            tracing::warn!(error = %e, "SIGTERM handler unavailable, only Ctrl+C stops the server");
            ctrl_c().await
        }
    }
}

#[cfg(not(unix))]
async fn termination() -> &'static str {
    ctrl_c().await
}

/// Resolves on Ctrl+C; never resolves if the handler cannot be installed.
async fn ctrl_c() -> &'static str {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Ctrl+C handler unavailable");
        std::future::pending::<()>().await;
    }
    "SIGINT"
}
