//! Rate retrieval orchestration with stale fallback.

use std::sync::Arc;

use plotrate_common::{time, Currency};
use tracing::{debug, info, instrument, warn};

use crate::cache::{Freshness, SnapshotCache};
use crate::error::FxResult;
use crate::provider::RateProvider;
use crate::snapshot::RateSnapshot;

/// Orchestrates the snapshot cache and the upstream provider.
pub struct RateService {
    provider: Arc<dyn RateProvider>,
    cache: SnapshotCache,
}

impl RateService {
    /// Create a new service over the given provider and cache.
    pub fn new(provider: Arc<dyn RateProvider>, cache: SnapshotCache) -> Self {
        Self { provider, cache }
    }

    /// Answer a rates request per the freshness policy.
    ///
    /// A fresh snapshot is returned as-is with no upstream call. Otherwise a
    /// single fetch is attempted: on success the new snapshot replaces the
    /// slot; on failure an existing stale snapshot is served unchanged, with
    /// its fetch time untouched so the next request retries. The fetch error
    /// only propagates when the cache has never been filled.
    #[instrument(skip(self), fields(base = %base))]
    pub async fn current_rates(&self, base: &Currency) -> FxResult<RateSnapshot> {
        let now = time::now();

        if self.cache.freshness(now) == Freshness::Fresh {
            if let Some(snapshot) = self.cache.get() {
                debug!("Serving fresh cached snapshot");
                return Ok(snapshot);
            }
        }

        match self.provider.fetch_rates(base).await {
            Ok(snapshot) => {
                self.cache.store_at(snapshot.clone(), now);
                info!(
                    provider = self.provider.name(),
                    base = %snapshot.base,
                    rates = snapshot.rates.len(),
                    "Refreshed rate snapshot"
                );
                Ok(snapshot)
            }
            Err(e) => match self.cache.get() {
                Some(stale) => {
                    warn!(error = %e, "Upstream fetch failed, serving stale snapshot");
                    Ok(stale)
                }
                None => {
                    warn!(error = %e, "Upstream fetch failed with empty cache");
                    Err(e)
                }
            },
        }
    }

    /// The cache backing this service.
    pub fn cache(&self) -> &SnapshotCache {
        &self.cache
    }
}
