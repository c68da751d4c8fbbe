//! Single-slot snapshot cache with a fixed freshness window.

use parking_lot::RwLock;
use plotrate_common::time::{self, constants, Timestamp};
use tracing::debug;

use crate::snapshot::RateSnapshot;

/// Freshness of the cache slot at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    /// No snapshot has ever been stored.
    Empty,
    /// Stored snapshot is younger than the freshness window.
    Fresh,
    /// Stored snapshot has aged past the freshness window.
    Stale,
}

/// A stored snapshot plus the local wall-clock time it was cached.
#[derive(Debug, Clone)]
struct StoredSnapshot {
    snapshot: RateSnapshot,
    fetched_at: Timestamp,
}

/// Cache holding the most recently fetched rate snapshot.
///
/// One slot, replaced wholesale under the write lock, so readers never
/// observe a partially written snapshot. A snapshot is only ever displaced
/// by a newer one. The cache is an owned value injected into the service
/// at construction; it is never persisted and starts empty on every boot.
pub struct SnapshotCache {
    slot: RwLock<Option<StoredSnapshot>>,
}

impl SnapshotCache {
    /// Create a new empty cache.
    pub fn new() -> Self {
        Self {
            slot: RwLock::new(None),
        }
    }

    /// Classify the slot against the freshness window at `now`.
    ///
    /// A snapshot aged exactly the window length is already stale.
    pub fn freshness(&self, now: Timestamp) -> Freshness {
        match self.slot.read().as_ref() {
            None => Freshness::Empty,
            Some(stored) => {
                let age = now.signed_duration_since(stored.fetched_at);
                if age < constants::rate_freshness_window() {
                    Freshness::Fresh
                } else {
                    Freshness::Stale
                }
            }
        }
    }

    /// Get the cached snapshot regardless of its age.
    pub fn get(&self) -> Option<RateSnapshot> {
        self.slot.read().as_ref().map(|s| s.snapshot.clone())
    }

    /// Local wall-clock time the current snapshot was stored.
    pub fn fetched_at(&self) -> Option<Timestamp> {
        self.slot.read().as_ref().map(|s| s.fetched_at)
    }

    /// Store a snapshot stamped with the current time.
    pub fn store(&self, snapshot: RateSnapshot) {
        self.store_at(snapshot, time::now());
    }

    /// Store a snapshot with an explicit fetch time.
    ///
    /// Tests use this to simulate entries of arbitrary age without touching
    /// the wall clock.
    pub fn store_at(&self, snapshot: RateSnapshot, fetched_at: Timestamp) {
        let mut slot = self.slot.write();
        *slot = Some(StoredSnapshot {
            snapshot,
            fetched_at,
        });
        debug!(%fetched_at, "Stored rate snapshot");
    }
}

impl Default for SnapshotCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use plotrate_common::Currency;
    use serde_json::json;

    fn make_snapshot() -> RateSnapshot {
        serde_json::from_value(json!({
            "success": true,
            "timestamp": 1_700_000_000,
            "base": "EUR",
            "date": "2023-11-14",
            "rates": { "AED": 4.0, "USD": 1.09 }
        }))
        .unwrap()
    }

    #[test]
    fn test_starts_empty() {
        let cache = SnapshotCache::new();
        assert_eq!(cache.freshness(time::now()), Freshness::Empty);
        assert!(cache.get().is_none());
        assert!(cache.fetched_at().is_none());
    }

    #[test]
    fn test_fresh_within_window() {
        let cache = SnapshotCache::new();
        let now = time::now();

        cache.store_at(make_snapshot(), now - Duration::hours(23));

        assert_eq!(cache.freshness(now), Freshness::Fresh);
        assert_eq!(cache.get().unwrap().base, Currency::eur());
    }

    #[test]
    fn test_stale_at_window_boundary() {
        let cache = SnapshotCache::new();
        let now = time::now();

        cache.store_at(make_snapshot(), now - Duration::hours(24));
        assert_eq!(cache.freshness(now), Freshness::Stale);

        cache.store_at(make_snapshot(), now - Duration::hours(25));
        assert_eq!(cache.freshness(now), Freshness::Stale);
    }

    #[test]
    fn test_stale_entry_still_readable() {
        let cache = SnapshotCache::new();
        let now = time::now();
        let fetched_at = now - Duration::hours(48);

        cache.store_at(make_snapshot(), fetched_at);

        assert_eq!(cache.freshness(now), Freshness::Stale);
        assert!(cache.get().unwrap().success);
        assert_eq!(cache.fetched_at(), Some(fetched_at));
    }

    #[test]
    fn test_store_replaces_slot() {
        let cache = SnapshotCache::new();
        let now = time::now();

        cache.store_at(make_snapshot(), now - Duration::hours(30));
        assert_eq!(cache.freshness(now), Freshness::Stale);

        let mut newer = make_snapshot();
        newer.timestamp = 1_700_100_000;
        cache.store_at(newer, now);

        assert_eq!(cache.freshness(now), Freshness::Fresh);
        assert_eq!(cache.get().unwrap().timestamp, 1_700_100_000);
    }
}
