use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time::MissedTickBehavior;

use crate::collect::Collector;

/// Outcome of one pass over all collectors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoundReport {
    pub succeeded: Vec<&'static str>,
    pub failed: Vec<&'static str>,
}

impl RoundReport {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Invokes every collector on a fixed interval.
///
/// A failing collector is logged and skipped; it never stops the round or
/// affects the other collectors' gauges.
pub struct Poller {
    collectors: Vec<Arc<dyn Collector>>,
    interval: Duration,
}

impl Poller {
    pub fn new(collectors: Vec<Arc<dyn Collector>>, interval: Duration) -> Self {
        Self { collectors, interval }
    }

    /// Run each collector once, sequentially.
    pub async fn run_once(&self) -> RoundReport {
        let mut report = RoundReport::default();
        for c in &self.collectors {
            match c.handle_metrics().await {
                Ok(()) => {
                    tracing::debug!(collector = c.name(), "metrics refreshed");
                    report.succeeded.push(c.name());
                }
                Err(e) if e.is_listing() => {
                    tracing::warn!(collector = c.name(), code = e.kind().as_str(), error = %e, "metrics refresh failed");
                    report.failed.push(c.name());
                }
                Err(e) => {
                    tracing::error!(collector = c.name(), code = e.kind().as_str(), error = %e, "collector failed outside listing");
                    report.failed.push(c.name());
                }
            }
        }
        report
    }

    /// Poll until `shutdown` becomes `true` (or its sender is dropped).
    pub async fn run(&self, mut shutdown: watch::Receiver<bool>) {
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        tracing::info!(collectors = self.collectors.len(), interval_ms = self.interval.as_millis() as u64, "poller started");
        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let report = self.run_once().await;
                    if !report.is_clean() {
                        tracing::warn!(failed = ?report.failed, "poll round finished with failures");
                    }
                }
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        break;
                    }
                }
            }
        }
        tracing::info!("poller stopped");
    }
}
