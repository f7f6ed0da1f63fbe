use std::future::Future;
use std::io;

/// Wait for a shutdown signal.
///
/// Returns `true` when the signal arrived and `false` when the handler could
/// not be installed. Either way the caller should shut down; the failure is
/// logged here so the reason is visible.
pub async fn wait_for_signal<F>(signal: F) -> bool
where
    F: Future<Output = io::Result<()>>,
{
    match signal.await {
        Ok(()) => {
            tracing::info!("shutdown requested");
            true
        }
        Err(e) => {
            tracing::error!(error = %e, "shutdown signal handler unavailable, shutting down");
            false
        }
    }
}
