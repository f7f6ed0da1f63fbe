//! OLM metrics exporter.
//!
//! - Registers the OLM resource-count metrics once, then polls every
//!   collector on `exporter.interval_ms`
//! - Serves `/metrics` and `/healthz` on `exporter.listen`
//! - Config path: first CLI argument, default `olm-metrics.yaml`

use std::process::ExitCode;

use tokio::sync::watch;
use tracing_subscriber::{fmt, EnvFilter};

use olm_metrics_exporter::driver::{wait_for_signal, Poller};
use olm_metrics_exporter::{app_state, config, router};

#[tokio::main]
async fn main() -> ExitCode {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(code = e.kind().as_str(), error = %e, "olm-metrics-exporter failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> olm_metrics_core::Result<()> {
    let path = std::env::args().nth(1).unwrap_or_else(|| "olm-metrics.yaml".to_string());
    let cfg = config::load_from_file(&path)?;

    // Metric registration happens here; a collision aborts before serving.
    let state = app_state::AppState::new(cfg)?;
    let listen = state.cfg().exporter.listen_addr()?;
    let poller = Poller::new(state.collectors(), state.cfg().exporter.interval());
    let app = router::build_router(state);

    let (stop_tx, stop_rx) = watch::channel(false);
    let poll_task = tokio::spawn(async move { poller.run(stop_rx).await });

    tracing::info!(%listen, "olm-metrics-exporter starting");
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| olm_metrics_core::MetricsError::Internal(format!("bind {listen}: {e}")))?;

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(async {
            wait_for_signal(tokio::signal::ctrl_c()).await;
        })
        .await;

    let _ = stop_tx.send(true);
    let _ = poll_task.await;

    served.map_err(|e| olm_metrics_core::MetricsError::Internal(format!("server failed: {e}")))
}
