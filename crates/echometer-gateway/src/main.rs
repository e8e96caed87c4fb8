//! echometer gateway binary.
//!
//! Usage: `echometer-gateway [config.yaml]` (default `echometer.yaml`).
//! Log filter comes from `RUST_LOG` (default `info`).

use tokio::net::TcpListener;
use tracing_subscriber::{fmt, EnvFilter};

use echometer_core::error::Result;
use echometer_gateway::{app_state, config, router};

#[tokio::main]
async fn main() -> Result<()> {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let path = std::env::args().nth(1).unwrap_or_else(|| "echometer.yaml".to_string());
    let cfg = config::load_from_file(&path)?;
    let listen = cfg.server.listen_addr()?;
    let metrics_listen = if cfg.metrics.enabled {
        cfg.metrics.listen_addr()?
    } else {
        None
    };

    let state = app_state::AppState::new(cfg);

    if let Some(addr) = metrics_listen {
        let listener = TcpListener::bind(addr).await?;
        let app = router::build_metrics_router(state.clone());
        tracing::info!(listen = %addr, path = %state.cfg().metrics.path, "metrics endpoint starting");
        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app)
                .with_graceful_shutdown(shutdown_signal())
                .await
            {
                tracing::error!(error = %e, "metrics server failed");
            }
        });
    }

    let app = router::build_router(state);
    tracing::info!(%listen, "echometer-gateway starting");
    let listener = TcpListener::bind(listen).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("echometer-gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("signal received, starting graceful shutdown");
}
