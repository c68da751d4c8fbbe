//! Shared application state for the HTTP layer.

use std::sync::Arc;

use plotrate_fx::RateService;

use crate::metrics::Metrics;

/// State shared by all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Rate retrieval service (cache plus upstream provider).
    pub rates: Arc<RateService>,
    /// Request counters.
    pub metrics: Arc<Metrics>,
}

impl AppState {
    /// Create state around a rate service.
    pub fn new(rates: Arc<RateService>) -> Self {
        Self {
            rates,
            metrics: Arc::new(Metrics::new()),
        }
    }
}
