//! Tracing setup and in-process counters

use std::sync::atomic::{AtomicU64, Ordering};
use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber. `RUST_LOG` wins over `default_filter`.
pub fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    // A second init (tests, embedding) keeps the first subscriber
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Metrics handle for recording counters
#[derive(Debug, Default)]
pub struct Metrics {
    collections_parsed: AtomicU64,
    collections_rejected: AtomicU64,
    endpoints_extracted: AtomicU64,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn collection_parsed(&self, endpoints: usize) {
        self.collections_parsed.fetch_add(1, Ordering::Relaxed);
        self.endpoints_extracted
            .fetch_add(endpoints as u64, Ordering::Relaxed);
        tracing::debug!(counter = "collections_parsed", endpoints, "Metric incremented");
    }

    pub fn collection_rejected(&self) {
        self.collections_rejected.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(counter = "collections_rejected", "Metric incremented");
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            collections_parsed: self.collections_parsed.load(Ordering::Relaxed),
            collections_rejected: self.collections_rejected.load(Ordering::Relaxed),
            endpoints_extracted: self.endpoints_extracted.load(Ordering::Relaxed),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub collections_parsed: u64,
    pub collections_rejected: u64,
    pub endpoints_extracted: u64,
}
