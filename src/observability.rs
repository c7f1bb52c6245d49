//! Logging setup and request counters

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing_subscriber::{EnvFilter, Registry, fmt, prelude::*, reload};

/// Handle for swapping the active log filter after startup
pub type LogFilterHandle = reload::Handle<EnvFilter, Registry>;

/// Install the global `tracing` subscriber
///
/// Starts with `RUST_LOG` or `info` so configuration loading is already
/// logged; [`apply_log_filter`] switches to the configured filter afterwards.
pub fn init_tracing() -> LogFilterHandle {
    let bootstrap = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let (filter, handle) = reload::Layer::new(bootstrap);

    // A subscriber may already be installed (tests, embedding)
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .try_init();

    handle
}

/// Switch to the configured filter; `RUST_LOG` wins when set
pub fn apply_log_filter(handle: &LogFilterHandle, configured: &str) {
    if std::env::var_os(EnvFilter::DEFAULT_ENV).is_some() {
        return;
    }
    if let Err(err) = reload_filter(handle, configured) {
        tracing::warn!(filter = configured, error = %err, "Keeping bootstrap log filter");
    }
}

fn reload_filter(handle: &LogFilterHandle, directives: &str) -> Result<(), String> {
    let filter = EnvFilter::try_new(directives).map_err(|e| e.to_string())?;
    handle.reload(filter).map_err(|e| e.to_string())
}

/// Metrics handle for request counters
#[derive(Debug, Default)]
pub struct Metrics {
    showcases_served: AtomicU64,
    lists_served: AtomicU64,
    notices_returned: AtomicU64,
    invalid_parameters: AtomicU64,
    store_faults: AtomicU64,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn showcase_served(&self) {
        self.showcases_served.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(counter = "showcases_served", "Metric incremented");
    }

    pub fn list_served(&self) {
        self.lists_served.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(counter = "lists_served", "Metric incremented");
    }

    pub fn notice_returned(&self) {
        self.notices_returned.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(counter = "notices_returned", "Metric incremented");
    }

    pub fn invalid_parameter(&self) {
        self.invalid_parameters.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(counter = "invalid_parameters", "Metric incremented");
    }

    pub fn store_fault(&self) {
        self.store_faults.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(counter = "store_faults", "Metric incremented");
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            showcases_served: self.showcases_served.load(Ordering::Relaxed),
            lists_served: self.lists_served.load(Ordering::Relaxed),
            notices_returned: self.notices_returned.load(Ordering::Relaxed),
            invalid_parameters: self.invalid_parameters.load(Ordering::Relaxed),
            store_faults: self.store_faults.load(Ordering::Relaxed),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub showcases_served: u64,
    pub lists_served: u64,
    pub notices_returned: u64,
    pub invalid_parameters: u64,
    pub store_faults: u64,
}

impl MetricsSnapshot {
    pub fn into_map(self) -> HashMap<String, u64> {
        HashMap::from([
            ("showcases_served".to_string(), self.showcases_served),
            ("lists_served".to_string(), self.lists_served),
            ("notices_returned".to_string(), self.notices_returned),
            ("invalid_parameters".to_string(), self.invalid_parameters),
            ("store_faults".to_string(), self.store_faults),
        ])
    }
}
