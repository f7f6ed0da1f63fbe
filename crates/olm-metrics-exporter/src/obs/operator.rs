//! OLM metric set and its one-time registration.
//!
//! To add a metric: declare it here, register it in `register`, and update
//! it from a collector (or from whichever component owns the event).

use olm_metrics_core::error::Result;
use olm_metrics_core::resource::ResourceKind;

use super::metrics::{Counter, Gauge, Registry};

pub const CSV_COUNT: &str = "csv_count";
pub const INSTALL_PLAN_COUNT: &str = "install_plan_count";
pub const SUBSCRIPTION_COUNT: &str = "subscription_count";
pub const CATALOG_SOURCE_COUNT: &str = "catalog_source_count";
pub const CSV_UPGRADE_COUNT: &str = "csv_upgrade_count";

/// Handles to every registered OLM metric.
///
/// Produced once by [`OperatorMetrics::register`] and passed explicitly to
/// collectors and the scrape endpoint.
#[derive(Clone)]
pub struct OperatorMetrics {
    csv_count: Gauge,
    install_plan_count: Gauge,
    subscription_count: Gauge,
    catalog_source_count: Gauge,
    csv_upgrade_count: Counter,
}

impl OperatorMetrics {
    /// Create all metrics, register them, and seal the registry.
    ///
    /// A name collision aborts bootstrap; callers treat the error as fatal.
    pub fn register(registry: &Registry) -> Result<Self> {
        let m = Self {
            csv_count: Gauge::new(CSV_COUNT, "Number of CSVs successfully registered"),
            install_plan_count: Gauge::new(INSTALL_PLAN_COUNT, "Number of install plans"),
            subscription_count: Gauge::new(SUBSCRIPTION_COUNT, "Number of subscriptions"),
            catalog_source_count: Gauge::new(CATALOG_SOURCE_COUNT, "Number of catalog sources"),
            csv_upgrade_count: Counter::new(CSV_UPGRADE_COUNT, "Monotonic count of catalog sources"),
        };

        registry.register_gauge(&m.csv_count)?;
        registry.register_gauge(&m.install_plan_count)?;
        registry.register_gauge(&m.subscription_count)?;
        registry.register_gauge(&m.catalog_source_count)?;
        registry.register_counter(&m.csv_upgrade_count)?;
        registry.seal()?;

        Ok(m)
    }

    pub fn csv_count(&self) -> &Gauge { &self.csv_count }
    pub fn install_plan_count(&self) -> &Gauge { &self.install_plan_count }
    pub fn subscription_count(&self) -> &Gauge { &self.subscription_count }
    pub fn catalog_source_count(&self) -> &Gauge { &self.catalog_source_count }

    /// Not polled by any collector; bumped by whatever observes CSV upgrades.
    pub fn csv_upgrade_count(&self) -> &Counter { &self.csv_upgrade_count }

    /// Gauge holding the population of `kind`.
    pub fn gauge_for(&self, kind: ResourceKind) -> &Gauge {
        match kind {
            ResourceKind::ClusterServiceVersion => &self.csv_count,
            ResourceKind::InstallPlan => &self.install_plan_count,
            ResourceKind::Subscription => &self.subscription_count,
            ResourceKind::CatalogSource => &self.catalog_source_count,
        }
    }
}
