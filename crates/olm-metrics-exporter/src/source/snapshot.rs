//! File-backed lister.
//!
//! Reads a YAML snapshot of the cluster on every call, so an external process
//! (or an operator editing the file) can change what the exporter observes
//! without a restart.
//!
//! ```yaml
//! clusterserviceversions:
//!   - { namespace: olm, name: packageserver }
//! catalogsources:
//!   - { namespace: olm, name: operatorhubio-catalog }
//! ```

use std::io;
use std::path::PathBuf;

use async_trait::async_trait;
use serde::Deserialize;

use olm_metrics_core::error::{MetricsError, Result};
use olm_metrics_core::resource::{ListParams, ObjectRef, ResourceKind, ResourceList, ResourceLister};

/// Parsed snapshot. Keys are the API resource plurals.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClusterSnapshot {
    #[serde(default)]
    pub clusterserviceversions: Vec<ObjectRef>,
    #[serde(default)]
    pub installplans: Vec<ObjectRef>,
    #[serde(default)]
    pub subscriptions: Vec<ObjectRef>,
    #[serde(default)]
    pub catalogsources: Vec<ObjectRef>,
}

impl ClusterSnapshot {
    pub fn parse(s: &str) -> Result<Self> {
        serde_yaml::from_str(s)
            .map_err(|e| MetricsError::MalformedResponse(format!("snapshot: {e}")))
    }

    pub fn objects(&self, kind: ResourceKind) -> &[ObjectRef] {
        match kind {
            ResourceKind::ClusterServiceVersion => &self.clusterserviceversions,
            ResourceKind::InstallPlan => &self.installplans,
            ResourceKind::Subscription => &self.subscriptions,
            ResourceKind::CatalogSource => &self.catalogsources,
        }
    }

    /// Apply `params` to the objects of `kind`.
    ///
    /// Only namespace scoping is understood; selectors are rejected rather
    /// than silently ignored.
    pub fn select(&self, kind: ResourceKind, params: &ListParams) -> Result<ResourceList> {
        if params.label_selector.is_some() || params.field_selector.is_some() {
            return Err(MetricsError::Internal("snapshot lister does not support selectors".into()));
        }
        let mut items: Vec<ObjectRef> = self
            .objects(kind)
            .iter()
            .filter(|o| params.namespace.as_deref().map_or(true, |ns| o.namespace == ns))
            .cloned()
            .collect();
        // limit 0 means unlimited, as in the Kubernetes list API.
        if let Some(limit) = params.limit.filter(|&l| l > 0) {
            items.truncate(limit as usize);
        }
        Ok(ResourceList::new(items))
    }
}

pub struct SnapshotLister {
    path: PathBuf,
}

impl SnapshotLister {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub async fn load(&self) -> Result<ClusterSnapshot> {
        let raw = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            let msg = format!("read {}: {e}", self.path.display());
            match e.kind() {
                io::ErrorKind::PermissionDenied => MetricsError::Unauthorized(msg),
                _ => MetricsError::Transport(msg),
            }
        })?;
        ClusterSnapshot::parse(&raw)
    }
}

#[async_trait]
impl ResourceLister for SnapshotLister {
    async fn list(&self, kind: ResourceKind, params: &ListParams) -> Result<ResourceList> {
        let snap = self.load().await?;
        snap.select(kind, params)
    }
}
