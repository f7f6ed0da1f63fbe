//! Scripted in-memory lister shared by the integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use olm_metrics_core::{ListParams, MetricsError, ObjectRef, ResourceKind, ResourceList, ResourceLister};

/// Returns whatever was last scripted for a kind; unscripted kinds list empty.
#[derive(Default)]
pub struct FakeLister {
    script: Mutex<HashMap<ResourceKind, Result<usize, MetricsError>>>,
    calls: AtomicUsize,
    last_params: Mutex<Option<ListParams>>,
}

impl FakeLister {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_count(&self, kind: ResourceKind, n: usize) {
        self.script.lock().unwrap().insert(kind, Ok(n));
    }

    pub fn fail(&self, kind: ResourceKind, err: MetricsError) {
        self.script.lock().unwrap().insert(kind, Err(err));
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_params(&self) -> Option<ListParams> {
        self.last_params.lock().unwrap().clone()
    }
}

#[async_trait]
impl ResourceLister for FakeLister {
    async fn list(&self, kind: ResourceKind, params: &ListParams) -> olm_metrics_core::Result<ResourceList> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_params.lock().unwrap() = Some(params.clone());

        let scripted = self.script.lock().unwrap().get(&kind).cloned().unwrap_or(Ok(0));
        let n = scripted?;
        let items = (0..n)
            .map(|i| ObjectRef { namespace: format!("ns-{}", i % 3), name: format!("{}-{i}", kind.plural()) })
            .collect();
        Ok(ResourceList::new(items))
    }
}
