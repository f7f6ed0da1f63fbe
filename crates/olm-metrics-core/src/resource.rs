//! Resource kinds and the listing contract consumed by collectors.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Control-plane resource kinds whose population is exported as a gauge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    ClusterServiceVersion,
    InstallPlan,
    Subscription,
    CatalogSource,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 4] = [
        ResourceKind::ClusterServiceVersion,
        ResourceKind::InstallPlan,
        ResourceKind::Subscription,
        ResourceKind::CatalogSource,
    ];

    /// Kubernetes kind name.
    pub fn as_str(self) -> &'static str {
        match self {
            ResourceKind::ClusterServiceVersion => "ClusterServiceVersion",
            ResourceKind::InstallPlan => "InstallPlan",
            ResourceKind::Subscription => "Subscription",
            ResourceKind::CatalogSource => "CatalogSource",
        }
    }

    /// API resource plural (`operators.coreos.com/v1alpha1`).
    pub fn plural(self) -> &'static str {
        match self {
            ResourceKind::ClusterServiceVersion => "clusterserviceversions",
            ResourceKind::InstallPlan => "installplans",
            ResourceKind::Subscription => "subscriptions",
            ResourceKind::CatalogSource => "catalogsources",
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters of a list request.
///
/// `namespace: None` means all namespaces. Collectors only ever send
/// [`ListParams::cluster_wide`]; the other fields exist so listers can be
/// shared with callers that do filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListParams {
    pub namespace: Option<String>,
    pub label_selector: Option<String>,
    pub field_selector: Option<String>,
    /// `Some(0)` is treated as no limit.
    pub limit: Option<u32>,
}

impl ListParams {
    /// Unfiltered, unpaginated, all-namespace request.
    pub fn cluster_wide() -> Self {
        Self::default()
    }

    pub fn in_namespace(namespace: impl Into<String>) -> Self {
        Self {
            namespace: Some(namespace.into()),
            ..Self::default()
        }
    }

    pub fn is_cluster_wide(&self) -> bool {
        self == &Self::cluster_wide()
    }
}

/// Identity of one listed object. Collectors never look inside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ObjectRef {
    pub namespace: String,
    pub name: String,
}

/// Result of a list call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceList {
    pub items: Vec<ObjectRef>,
}

impl ResourceList {
    pub fn new(items: Vec<ObjectRef>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Listing client for control-plane resources.
///
/// Implementations own transport concerns (timeouts, auth, retries). Any
/// failure is returned as a listing error (`Transport`, `Unauthorized`,
/// `MalformedResponse`) and is surfaced to the caller untouched.
#[async_trait]
pub trait ResourceLister: Send + Sync {
    async fn list(&self, kind: ResourceKind, params: &ListParams) -> Result<ResourceList>;
}
