#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::collections::HashSet;

use olm_metrics_core::{ErrorKind, ListParams, MetricsError, ObjectRef, ResourceKind};

#[test]
fn kinds_are_distinct_and_named() {
    let names: HashSet<&str> = ResourceKind::ALL.iter().map(|k| k.as_str()).collect();
    let plurals: HashSet<&str> = ResourceKind::ALL.iter().map(|k| k.plural()).collect();
    assert_eq!(names.len(), 4);
    assert_eq!(plurals.len(), 4);
    assert_eq!(ResourceKind::InstallPlan.to_string(), "InstallPlan");
    assert_eq!(ResourceKind::ClusterServiceVersion.plural(), "clusterserviceversions");
}

#[test]
fn cluster_wide_has_no_filters() {
    let p = ListParams::cluster_wide();
    assert!(p.is_cluster_wide());
    assert!(p.namespace.is_none());
    assert!(p.label_selector.is_none());
    assert!(p.field_selector.is_none());
    assert!(p.limit.is_none());

    assert!(!ListParams::in_namespace("olm").is_cluster_wide());
}

#[test]
fn listing_errors_are_classified() {
    assert!(MetricsError::Transport("dial".into()).is_listing());
    assert!(MetricsError::Unauthorized("403".into()).is_listing());
    assert!(MetricsError::MalformedResponse("eof".into()).is_listing());
    assert!(!MetricsError::AlreadyRegistered("csv_count".into()).is_listing());

    let e = MetricsError::RegistrySealed("x".into());
    assert_eq!(e.kind(), ErrorKind::RegistrySealed);
    assert_eq!(e.kind().as_str(), "REGISTRY_SEALED");
    assert_eq!(MetricsError::RegistryFailed("x".into()).kind().as_str(), "REGISTRY_FAILED");
    assert!(!MetricsError::RegistryFailed("x".into()).is_listing());
}

#[test]
fn object_ref_rejects_unknown_fields() {
    let ok: ObjectRef = serde_yaml::from_str("namespace: olm\nname: packageserver\n").unwrap();
    assert_eq!(ok.name, "packageserver");

    let bad = serde_yaml::from_str::<ObjectRef>("namespace: olm\nname: a\nnmae: b\n");
    assert!(bad.is_err());
}
