use anyhow::{Context, Result};
use std::net::SocketAddr;
use tokio_util::sync::CancellationToken;

use crate::catalog;
use crate::config::SiteConfig;
use crate::site::{AppState, SiteRenderer, router};

pub async fn handle_serve(config: SiteConfig, addr: SocketAddr) -> Result<()> {
    catalog::ensure_valid()?;

    let renderer = SiteRenderer::new(config).context("Failed to load page templates")?;
    let app = router(AppState::new(renderer));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    log::info!("Serving {} tools on http://{addr}", catalog::all_tools().len());

    let shutdown = CancellationToken::new();
    let signal_token = shutdown.clone();
    tokio::spawn(async move {
        shutdown_signal().await;
        log::info!("Received interrupt signal, shutting down");
        signal_token.cancel();
    });

    serve_until(listener, app, shutdown).await?;

    log::info!("Server stopped");
    Ok(())
}

/// Serve `app` until `shutdown` is cancelled, then drain open connections.
async fn serve_until(
    listener: tokio::net::TcpListener,
    app: axum::Router,
    shutdown: CancellationToken,
) -> Result<()> {
    axum::serve(listener, app)
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await
        .context("Server error")
}

/// Resolves on Ctrl-C, or on SIGTERM where the platform has it.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log::warn!("Failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                log::warn!("Failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
}
