//! Plotrate FX
//!
//! Exchange rate retrieval and property price conversion.
//!
//! # Features
//!
//! - Upstream rate provider behind a trait seam
//! - Single-slot snapshot cache with a fixed freshness window
//! - Stale-over-unavailable fallback when the upstream fails
//! - Pure price conversion arithmetic (EUR/m² to AED/ft² and back)
//!
//! # Example
//!
//! ```rust,ignore
//! use plotrate_fx::{FixerProvider, RateService, SnapshotCache};
//! use plotrate_common::Currency;
//!
//! let provider = Arc::new(FixerProvider::new(client, base_url, api_key));
//! let service = RateService::new(provider, SnapshotCache::new());
//!
//! let snapshot = service.current_rates(&Currency::eur()).await?;
//! ```

pub mod cache;
pub mod convert;
pub mod error;
pub mod provider;
pub mod service;
pub mod snapshot;

pub use cache::{Freshness, SnapshotCache};
pub use error::{FxError, FxResult};
pub use provider::{FixerProvider, RateProvider};
pub use service::RateService;
pub use snapshot::RateSnapshot;

#[cfg(any(test, feature = "test-utils"))]
pub use provider::MockRateProvider;
