//! Time utilities and constants for the Plotrate service.

use chrono::{DateTime, Duration, Utc};

/// Service timing constants.
pub mod constants {
    use super::Duration;

    /// How long a fetched rate snapshot stays fresh (24 hours).
    pub fn rate_freshness_window() -> Duration {
        Duration::hours(24)
    }

    /// Timeout for a single upstream rate request (10 seconds).
    pub fn upstream_request_timeout() -> Duration {
        Duration::seconds(10)
    }
}

/// A timestamp with timezone (always UTC for Plotrate).
pub type Timestamp = DateTime<Utc>;

/// Get the current timestamp.
pub fn now() -> Timestamp {
    Utc::now()
}

/// Duration extensions for convenient construction.
pub trait DurationExt {
    fn as_std(&self) -> std::time::Duration;
}

impl DurationExt for Duration {
    fn as_std(&self) -> std::time::Duration {
        self.to_std().unwrap_or(std::time::Duration::ZERO)
    }
}
