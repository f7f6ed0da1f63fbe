//! Shared application state for the exporter.
//!
//! Bootstrap order: registry -> metrics -> lister -> collectors. Any failure
//! is returned so `main` can abort before anything is served or polled.

use std::sync::Arc;

use olm_metrics_core::error::Result;
use olm_metrics_core::resource::ResourceLister;

use crate::collect::{collectors_for, Collector};
use crate::config::ExporterConfig;
use crate::obs::{OperatorMetrics, Registry};
use crate::source::SnapshotLister;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ExporterConfig,
    registry: Registry,
    metrics: OperatorMetrics,
    collectors: Vec<Arc<dyn Collector>>,
}

impl AppState {
    /// Build state with the snapshot lister named in the config.
    pub fn new(cfg: ExporterConfig) -> Result<Self> {
        let lister: Arc<dyn ResourceLister> = Arc::new(SnapshotLister::new(&cfg.source.snapshot_path));
        Self::with_lister(cfg, lister)
    }

    /// Build state around an arbitrary lister.
    pub fn with_lister(cfg: ExporterConfig, lister: Arc<dyn ResourceLister>) -> Result<Self> {
        let registry = Registry::new();
        let metrics = OperatorMetrics::register(&registry)?;
        let collectors = collectors_for(lister, &metrics, &cfg.collectors);

        for c in &collectors {
            tracing::debug!(collector = c.name(), "collector wired");
        }

        Ok(Self {
            inner: Arc::new(AppStateInner { cfg, registry, metrics, collectors }),
        })
    }

    pub fn cfg(&self) -> &ExporterConfig {
        &self.inner.cfg
    }

    pub fn registry(&self) -> &Registry {
        &self.inner.registry
    }

    pub fn metrics(&self) -> &OperatorMetrics {
        &self.inner.metrics
    }

    pub fn collectors(&self) -> Vec<Arc<dyn Collector>> {
        self.inner.collectors.clone()
    }
}
