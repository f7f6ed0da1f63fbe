use std::net::SocketAddr;
use std::time::Duration;

use serde::Deserialize;

use olm_metrics_core::error::{MetricsError, Result};
use olm_metrics_core::resource::ResourceKind;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExporterConfig {
    pub version: u32,

    #[serde(default)]
    pub exporter: ExporterSection,

    #[serde(default)]
    pub collectors: CollectorsSection,

    pub source: SourceSection,
}

impl ExporterConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(MetricsError::UnsupportedVersion);
        }
        self.exporter.validate()?;
        self.source.validate()?;
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExporterSection {
    #[serde(default = "default_listen")]
    pub listen: String,

    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
}

impl Default for ExporterSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            interval_ms: default_interval_ms(),
        }
    }
}

impl ExporterSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr()?;
        if !(1000..=3_600_000).contains(&self.interval_ms) {
            return Err(MetricsError::BadConfig(
                "exporter.interval_ms must be between 1000 and 3600000".into(),
            ));
        }
        Ok(())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|e| {
            MetricsError::BadConfig(format!("exporter.listen is not a socket address: {e}"))
        })
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

fn default_listen() -> String {
    "0.0.0.0:9090".into()
}
fn default_interval_ms() -> u64 {
    30000
}
fn default_true() -> bool {
    true
}

/// Which collectors run. A disabled slot is filled with a null collector.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CollectorsSection {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_true")]
    pub csv: bool,
    #[serde(default = "default_true")]
    pub install_plan: bool,
    #[serde(default = "default_true")]
    pub subscription: bool,
    #[serde(default = "default_true")]
    pub catalog_source: bool,
}

impl Default for CollectorsSection {
    fn default() -> Self {
        Self {
            enabled: true,
            csv: true,
            install_plan: true,
            subscription: true,
            catalog_source: true,
        }
    }
}

impl CollectorsSection {
    pub fn is_enabled(&self, kind: ResourceKind) -> bool {
        if !self.enabled {
            return false;
        }
        match kind {
            ResourceKind::ClusterServiceVersion => self.csv,
            ResourceKind::InstallPlan => self.install_plan,
            ResourceKind::Subscription => self.subscription,
            ResourceKind::CatalogSource => self.catalog_source,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceSection {
    pub snapshot_path: String,
}

impl SourceSection {
    pub fn validate(&self) -> Result<()> {
        if self.snapshot_path.trim().is_empty() {
            return Err(MetricsError::BadConfig("source.snapshot_path must not be empty".into()));
        }
        Ok(())
    }
}
