//! Metrics collection for server monitoring.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Server metrics.
pub struct Metrics {
    /// Total conversion requests.
    pub conversions_total: AtomicU64,
    /// Conversion requests rejected by validation.
    pub conversions_rejected: AtomicU64,
    /// Total rate requests.
    pub rates_total: AtomicU64,
    /// Rate requests answered from the fresh cache.
    pub rates_cache_hits: AtomicU64,
    /// Rate requests that refreshed the cache from upstream.
    pub rates_refreshed: AtomicU64,
    /// Rate requests answered with a stale snapshot after a failed fetch.
    pub rates_stale_served: AtomicU64,
    /// Rate requests that failed outright.
    pub rates_failed: AtomicU64,
}

impl Metrics {
    /// Create new metrics instance.
    pub fn new() -> Self {
        Self {
            conversions_total: AtomicU64::new(0),
            conversions_rejected: AtomicU64::new(0),
            rates_total: AtomicU64::new(0),
            rates_cache_hits: AtomicU64::new(0),
            rates_refreshed: AtomicU64::new(0),
            rates_stale_served: AtomicU64::new(0),
            rates_failed: AtomicU64::new(0),
        }
    }

    /// Record a conversion request.
    pub fn conversion_requested(&self) {
        self.conversions_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a rejected conversion request.
    pub fn conversion_rejected(&self) {
        self.conversions_rejected.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a rate request.
    pub fn rates_requested(&self) {
        self.rates_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a rate request served from the fresh cache.
    pub fn rates_cache_hit(&self) {
        self.rates_cache_hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a rate request that refreshed the cache.
    pub fn rates_refreshed(&self) {
        self.rates_refreshed.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a rate request answered with a stale snapshot.
    pub fn rates_stale_served(&self) {
        self.rates_stale_served.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a failed rate request.
    pub fn rates_failed(&self) {
        self.rates_failed.fetch_add(1, Ordering::Relaxed);
    }

    /// Get current metrics snapshot.
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            conversions_total: self.conversions_total.load(Ordering::Relaxed),
            conversions_rejected: self.conversions_rejected.load(Ordering::Relaxed),
            rates_total: self.rates_total.load(Ordering::Relaxed),
            rates_cache_hits: self.rates_cache_hits.load(Ordering::Relaxed),
            rates_refreshed: self.rates_refreshed.load(Ordering::Relaxed),
            rates_stale_served: self.rates_stale_served.load(Ordering::Relaxed),
            rates_failed: self.rates_failed.load(Ordering::Relaxed),
        }
    }

    /// Export metrics in Prometheus format.
    pub fn to_prometheus(&self) -> String {
        let snapshot = self.snapshot();
        format!(
            r#"# HELP plotrate_conversions_total Total conversion requests
# TYPE plotrate_conversions_total counter
plotrate_conversions_total {}

# HELP plotrate_conversions_rejected Conversion requests rejected by validation
# TYPE plotrate_conversions_rejected counter
plotrate_conversions_rejected {}

# HELP plotrate_rates_total Total rate requests
# TYPE plotrate_rates_total counter
plotrate_rates_total {}

# HELP plotrate_rates_cache_hits Rate requests served from the fresh cache
# TYPE plotrate_rates_cache_hits counter
plotrate_rates_cache_hits {}

# HELP plotrate_rates_refreshed Rate requests that refreshed the cache
# TYPE plotrate_rates_refreshed counter
plotrate_rates_refreshed {}

# HELP plotrate_rates_stale_served Rate requests answered with a stale snapshot
# TYPE plotrate_rates_stale_served counter
plotrate_rates_stale_served {}

# HELP plotrate_rates_failed Rate requests that failed outright
# TYPE plotrate_rates_failed counter
plotrate_rates_failed {}
"#,
            snapshot.conversions_total,
            snapshot.conversions_rejected,
            snapshot.rates_total,
            snapshot.rates_cache_hits,
            snapshot.rates_refreshed,
            snapshot.rates_stale_served,
            snapshot.rates_failed,
        )
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Snapshot of metrics at a point in time.
#[derive(Debug, Clone)]
pub struct MetricsSnapshot {
    pub conversions_total: u64,
    pub conversions_rejected: u64,
    pub rates_total: u64,
    pub rates_cache_hits: u64,
    pub rates_refreshed: u64,
    pub rates_stale_served: u64,
    pub rates_failed: u64,
}

/// Shared metrics instance.
pub type SharedMetrics = Arc<Metrics>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_increment() {
        let metrics = Metrics::new();

        metrics.conversion_requested();
        metrics.conversion_requested();
        metrics.conversion_rejected();
        metrics.rates_requested();
        metrics.rates_cache_hit();

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.conversions_total, 2);
        assert_eq!(snapshot.conversions_rejected, 1);
        assert_eq!(snapshot.rates_total, 1);
        assert_eq!(snapshot.rates_cache_hits, 1);
    }

    #[test]
    fn test_prometheus_export() {
        let metrics = Metrics::new();
        metrics.rates_requested();

        let output = metrics.to_prometheus();
        assert!(output.contains("plotrate_rates_total 1"));
        assert!(output.contains("plotrate_conversions_total 0"));
    }
}
