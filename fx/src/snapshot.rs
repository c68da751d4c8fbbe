//! Rate snapshot model.

use plotrate_common::Currency;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One immutable fetched set of exchange rates plus provider metadata.
///
/// Serializes in the shape the upstream provider reports, which is also the
/// shape `/api/exchange-rates` returns to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateSnapshot {
    /// Whether the upstream call that produced this snapshot succeeded.
    pub success: bool,
    /// Provider-reported epoch seconds for the rates.
    pub timestamp: i64,
    /// Base currency all rates are expressed relative to.
    pub base: Currency,
    /// Provider-reported date of the rates (YYYY-MM-DD).
    pub date: String,
    /// 1 unit of `base` = `rates[code]` units of `code`.
    pub rates: HashMap<String, f64>,
}

impl RateSnapshot {
    /// Look up the rate for a currency code.
    ///
    /// The base currency maps to 1.0 even when the provider leaves it out of
    /// the table.
    pub fn rate_for(&self, code: &str) -> Option<f64> {
        if let Some(rate) = self.rates.get(code) {
            Some(*rate)
        } else if code == self.base.code() {
            Some(1.0)
        } else {
            None
        }
    }
}
