//! Per-kind resource count collectors.
//!
//! Each issues an unfiltered, all-namespace list for its kind and overwrites
//! its gauge with the number of returned items.

use std::sync::Arc;

use async_trait::async_trait;

use olm_metrics_core::error::Result;
use olm_metrics_core::resource::{ListParams, ResourceKind, ResourceLister};

use crate::obs::{Gauge, OperatorMetrics};

use super::Collector;

// Gauge is written only after the list call succeeded.
async fn count_into(lister: &dyn ResourceLister, kind: ResourceKind, gauge: &Gauge) -> Result<()> {
    let list = lister.list(kind, &ListParams::cluster_wide()).await?;
    gauge.set(list.len() as f64);
    Ok(())
}

/// Counts ClusterServiceVersions into `csv_count`.
pub struct CsvCollector {
    lister: Arc<dyn ResourceLister>,
    gauge: Gauge,
}

impl CsvCollector {
    pub fn new(lister: Arc<dyn ResourceLister>, metrics: &OperatorMetrics) -> Self {
        Self { lister, gauge: metrics.csv_count().clone() }
    }
}

#[async_trait]
impl Collector for CsvCollector {
    fn name(&self) -> &'static str {
        "csv"
    }

    async fn handle_metrics(&self) -> Result<()> {
        count_into(self.lister.as_ref(), ResourceKind::ClusterServiceVersion, &self.gauge).await
    }
}

/// Counts InstallPlans into `install_plan_count`.
pub struct InstallPlanCollector {
    lister: Arc<dyn ResourceLister>,
    gauge: Gauge,
}

impl InstallPlanCollector {
    pub fn new(lister: Arc<dyn ResourceLister>, metrics: &OperatorMetrics) -> Self {
        Self { lister, gauge: metrics.install_plan_count().clone() }
    }
}

#[async_trait]
impl Collector for InstallPlanCollector {
    fn name(&self) -> &'static str {
        "install_plan"
    }

    async fn handle_metrics(&self) -> Result<()> {
        count_into(self.lister.as_ref(), ResourceKind::InstallPlan, &self.gauge).await
    }
}

/// Counts Subscriptions into `subscription_count`.
pub struct SubscriptionCollector {
    lister: Arc<dyn ResourceLister>,
    gauge: Gauge,
}

impl SubscriptionCollector {
    pub fn new(lister: Arc<dyn ResourceLister>, metrics: &OperatorMetrics) -> Self {
        Self { lister, gauge: metrics.subscription_count().clone() }
    }
}

#[async_trait]
impl Collector for SubscriptionCollector {
    fn name(&self) -> &'static str {
        "subscription"
    }

    async fn handle_metrics(&self) -> Result<()> {
        count_into(self.lister.as_ref(), ResourceKind::Subscription, &self.gauge).await
    }
}

/// Counts CatalogSources into `catalog_source_count`.
pub struct CatalogSourceCollector {
    lister: Arc<dyn ResourceLister>,
    gauge: Gauge,
}

impl CatalogSourceCollector {
    pub fn new(lister: Arc<dyn ResourceLister>, metrics: &OperatorMetrics) -> Self {
        Self { lister, gauge: metrics.catalog_source_count().clone() }
    }
}

#[async_trait]
impl Collector for CatalogSourceCollector {
    fn name(&self) -> &'static str {
        "catalog_source"
    }

    async fn handle_metrics(&self) -> Result<()> {
        count_into(self.lister.as_ref(), ResourceKind::CatalogSource, &self.gauge).await
    }
}
