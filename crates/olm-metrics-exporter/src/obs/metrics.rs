//! Minimal metrics registry for the exporter.
//!
//! Gauges keep their value as `f64` bits inside an `AtomicU64` so `set` is a
//! single store. The registry maps metric names to handles in a `DashMap` and
//! remembers registration order for deterministic rendering. Bootstrap state
//! sits behind a `Mutex`; it is only taken while registering or sealing.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::fmt::Write;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use olm_metrics_core::error::{MetricsError, Result};

struct MetricDesc {
    name: &'static str,
    help: &'static str,
}

/// Settable gauge handle. Clones share the same value.
#[derive(Clone)]
pub struct Gauge {
    desc: Arc<MetricDesc>,
    bits: Arc<AtomicU64>,
}

impl Gauge {
    pub fn new(name: &'static str, help: &'static str) -> Self {
        Self {
            desc: Arc::new(MetricDesc { name, help }),
            bits: Arc::new(AtomicU64::new(0f64.to_bits())),
        }
    }

    pub fn name(&self) -> &'static str { self.desc.name }
    pub fn help(&self) -> &'static str { self.desc.help }

    /// Replace the current value.
    pub fn set(&self, v: f64) {
        self.bits.store(v.to_bits(), Ordering::Relaxed);
    }

    pub fn get(&self) -> f64 {
        f64::from_bits(self.bits.load(Ordering::Relaxed))
    }
}

/// Monotonic counter handle. Clones share the same value.
#[derive(Clone)]
pub struct Counter {
    desc: Arc<MetricDesc>,
    value: Arc<AtomicU64>,
}

impl Counter {
    pub fn new(name: &'static str, help: &'static str) -> Self {
        Self {
            desc: Arc::new(MetricDesc { name, help }),
            value: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn name(&self) -> &'static str { self.desc.name }
    pub fn help(&self) -> &'static str { self.desc.help }

    /// Increment by 1.
    pub fn inc(&self) { self.inc_by(1); }

    /// Increment by an arbitrary value.
    pub fn inc_by(&self, v: u64) {
        self.value.fetch_add(v, Ordering::Relaxed);
    }

    pub fn get(&self) -> u64 {
        self.value.load(Ordering::Relaxed)
    }
}

#[derive(Clone)]
enum Metric {
    Gauge(Gauge),
    Counter(Counter),
}

struct Registered {
    seq: u64,
    metric: Metric,
}

/// Bootstrap lifecycle of a [`Registry`].
///
/// `Ready` and `Failed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryState {
    Uninitialized,
    Registering,
    Ready,
    /// A name collision aborted bootstrap.
    Failed,
}

/// Name -> metric registry.
///
/// Accepts registrations until [`Registry::seal`]; after that it only serves
/// lookups and rendering. A name collision moves it to `Failed` for good.
pub struct Registry {
    metrics: DashMap<&'static str, Registered>,
    seq: AtomicU64,
    // Held across check + insert so seal() cannot interleave.
    state: Mutex<RegistryState>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    pub fn new() -> Self {
        Self {
            metrics: DashMap::new(),
            seq: AtomicU64::new(0),
            state: Mutex::new(RegistryState::Uninitialized),
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, RegistryState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn state(&self) -> RegistryState {
        *self.lock_state()
    }

    pub fn register_gauge(&self, gauge: &Gauge) -> Result<()> {
        self.register(gauge.name(), Metric::Gauge(gauge.clone()))
    }

    pub fn register_counter(&self, counter: &Counter) -> Result<()> {
        self.register(counter.name(), Metric::Counter(counter.clone()))
    }

    fn register(&self, name: &'static str, metric: Metric) -> Result<()> {
        let mut state = self.lock_state();
        match *state {
            RegistryState::Ready => return Err(MetricsError::RegistrySealed(name.to_string())),
            RegistryState::Failed => return Err(MetricsError::RegistryFailed(name.to_string())),
            RegistryState::Uninitialized | RegistryState::Registering => {}
        }

        match self.metrics.entry(name) {
            Entry::Occupied(_) => {
                *state = RegistryState::Failed;
                Err(MetricsError::AlreadyRegistered(name.to_string()))
            }
            Entry::Vacant(slot) => {
                let seq = self.seq.fetch_add(1, Ordering::Relaxed);
                slot.insert(Registered { seq, metric });
                *state = RegistryState::Registering;
                Ok(())
            }
        }
    }

    /// Finish bootstrap. No further registrations are accepted.
    ///
    /// Fails if bootstrap already aborted on a collision.
    pub fn seal(&self) -> Result<()> {
        let mut state = self.lock_state();
        if *state == RegistryState::Failed {
            return Err(MetricsError::RegistryFailed("seal".to_string()));
        }
        *state = RegistryState::Ready;
        Ok(())
    }

    pub fn gauge(&self, name: &str) -> Option<Gauge> {
        match &self.metrics.get(name)?.value().metric {
            Metric::Gauge(g) => Some(g.clone()),
            Metric::Counter(_) => None,
        }
    }

    pub fn counter(&self, name: &str) -> Option<Counter> {
        match &self.metrics.get(name)?.value().metric {
            Metric::Counter(c) => Some(c.clone()),
            Metric::Gauge(_) => None,
        }
    }

    /// Registered names in registration order.
    pub fn names(&self) -> Vec<&'static str> {
        self.ordered().into_iter().map(|m| match m {
            Metric::Gauge(g) => g.name(),
            Metric::Counter(c) => c.name(),
        }).collect()
    }

    fn ordered(&self) -> Vec<Metric> {
        let mut all: Vec<(u64, Metric)> = self.metrics.iter()
            .map(|r| (r.value().seq, r.value().metric.clone()))
            .collect();
        all.sort_by_key(|(seq, _)| *seq);
        all.into_iter().map(|(_, m)| m).collect()
    }

    /// Render in Prometheus text exposition format.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for m in self.ordered() {
            match m {
                Metric::Gauge(g) => {
                    let _ = writeln!(out, "# HELP {} {}", g.name(), g.help());
                    let _ = writeln!(out, "# TYPE {} gauge", g.name());
                    let _ = writeln!(out, "{} {}", g.name(), g.get());
                }
                Metric::Counter(c) => {
                    let _ = writeln!(out, "# HELP {} {}", c.name(), c.help());
                    let _ = writeln!(out, "# TYPE {} counter", c.name());
                    let _ = writeln!(out, "{} {}", c.name(), c.get());
                }
            }
        }
        out
    }
}
