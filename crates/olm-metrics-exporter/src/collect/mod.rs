//! Collector abstraction and its variants.
//!
//! One collector per resource kind, plus [`NullCollector`] for disabled
//! slots. Drivers hold them as `Arc<dyn Collector>` and call them uniformly.

pub mod kinds;
pub mod null;

use std::sync::Arc;

use async_trait::async_trait;

use olm_metrics_core::error::Result;
use olm_metrics_core::resource::{ResourceKind, ResourceLister};

use crate::config::CollectorsSection;
use crate::obs::OperatorMetrics;

pub use kinds::{CatalogSourceCollector, CsvCollector, InstallPlanCollector, SubscriptionCollector};
pub use null::NullCollector;

/// Refreshes exactly one metric from the control plane.
///
/// On success the collector's gauge holds the freshly observed value. On
/// failure the gauge is left untouched and the listing error is returned as-is.
#[async_trait]
pub trait Collector: Send + Sync {
    fn name(&self) -> &'static str;
    async fn handle_metrics(&self) -> Result<()>;
}

/// Build the collector for `kind`.
pub fn collector_for(
    kind: ResourceKind,
    lister: Arc<dyn ResourceLister>,
    metrics: &OperatorMetrics,
) -> Arc<dyn Collector> {
    match kind {
        ResourceKind::ClusterServiceVersion => Arc::new(CsvCollector::new(lister, metrics)),
        ResourceKind::InstallPlan => Arc::new(InstallPlanCollector::new(lister, metrics)),
        ResourceKind::Subscription => Arc::new(SubscriptionCollector::new(lister, metrics)),
        ResourceKind::CatalogSource => Arc::new(CatalogSourceCollector::new(lister, metrics)),
    }
}

/// One collector per resource kind, in [`ResourceKind::ALL`] order.
/// Disabled kinds get a [`NullCollector`].
pub fn collectors_for(
    lister: Arc<dyn ResourceLister>,
    metrics: &OperatorMetrics,
    cfg: &CollectorsSection,
) -> Vec<Arc<dyn Collector>> {
    ResourceKind::ALL
        .iter()
        .map(|&kind| {
            if cfg.is_enabled(kind) {
                collector_for(kind, Arc::clone(&lister), metrics)
            } else {
                Arc::new(NullCollector::new()) as Arc<dyn Collector>
            }
        })
        .collect()
}
