#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::path::PathBuf;
use std::sync::Arc;

use olm_metrics_core::{ErrorKind, ListParams, ResourceKind, ResourceLister};
use olm_metrics_exporter::collect::{Collector, CsvCollector};
use olm_metrics_exporter::obs::{OperatorMetrics, Registry};
use olm_metrics_exporter::source::{ClusterSnapshot, SnapshotLister};

const SNAPSHOT: &str = r#"
clusterserviceversions:
  - { namespace: olm, name: packageserver }
  - { namespace: operators, name: etcdoperator.v0.9.4 }
  - { namespace: operators, name: prometheusoperator.0.32.0 }
installplans:
  - { namespace: operators, name: install-abcde }
catalogsources:
  - { namespace: olm, name: operatorhubio-catalog }
"#;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("olm-metrics-{}-{name}.yaml", std::process::id()))
}

#[test]
fn snapshot_selects_by_kind_and_namespace() {
    let snap = ClusterSnapshot::parse(SNAPSHOT).unwrap();

    assert_eq!(snap.select(ResourceKind::ClusterServiceVersion, &ListParams::cluster_wide()).unwrap().len(), 3);
    assert_eq!(snap.select(ResourceKind::InstallPlan, &ListParams::cluster_wide()).unwrap().len(), 1);
    assert!(snap.select(ResourceKind::Subscription, &ListParams::cluster_wide()).unwrap().is_empty());

    let scoped = snap
        .select(ResourceKind::ClusterServiceVersion, &ListParams::in_namespace("operators"))
        .unwrap();
    assert_eq!(scoped.len(), 2);

    let unlimited = ListParams { limit: Some(0), ..ListParams::cluster_wide() };
    assert_eq!(snap.select(ResourceKind::ClusterServiceVersion, &unlimited).unwrap().len(), 3);
    let two = ListParams { limit: Some(2), ..ListParams::cluster_wide() };
    assert_eq!(snap.select(ResourceKind::ClusterServiceVersion, &two).unwrap().len(), 2);

    let selector = ListParams { label_selector: Some("app=x".into()), ..ListParams::default() };
    assert!(snap.select(ResourceKind::ClusterServiceVersion, &selector).is_err());
}

#[test]
fn malformed_snapshot_is_reported() {
    let err = ClusterSnapshot::parse("subscriptionz: []\n").expect_err("unknown key");
    assert_eq!(err.kind(), ErrorKind::MalformedResponse);
}

#[tokio::test]
async fn missing_file_is_a_transport_error() {
    let lister = SnapshotLister::new(temp_path("missing"));
    let err = lister
        .list(ResourceKind::CatalogSource, &ListParams::cluster_wide())
        .await
        .expect_err("missing file");
    assert_eq!(err.kind(), ErrorKind::Transport);
}

#[tokio::test]
async fn counts_track_file_edits() {
    let path = temp_path("edits");
    std::fs::write(&path, SNAPSHOT).unwrap();

    let registry = Registry::new();
    let metrics = OperatorMetrics::register(&registry).unwrap();
    let lister: Arc<dyn ResourceLister> = Arc::new(SnapshotLister::new(&path));
    let c = CsvCollector::new(lister, &metrics);

    c.handle_metrics().await.unwrap();
    assert_eq!(metrics.csv_count().get(), 3.0);

    std::fs::write(&path, "clusterserviceversions:\n  - { namespace: olm, name: packageserver }\n").unwrap();
    c.handle_metrics().await.unwrap();
    assert_eq!(metrics.csv_count().get(), 1.0);

    std::fs::write(&path, "clusterserviceversions: [[[\n").unwrap();
    let err = c.handle_metrics().await.expect_err("garbage");
    assert_eq!(err.kind(), ErrorKind::MalformedResponse);
    assert_eq!(metrics.csv_count().get(), 1.0);

    let _ = std::fs::remove_file(&path);
}
