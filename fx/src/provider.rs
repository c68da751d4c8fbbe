//! Rate provider trait and the Fixer.io implementation.

use async_trait::async_trait;
use plotrate_common::Currency;
use serde::Deserialize;
use std::collections::HashMap;
use tracing::{debug, warn};

use crate::error::{FxError, FxResult};
use crate::snapshot::RateSnapshot;

/// Default Fixer.io endpoint.
pub const FIXER_API_BASE: &str = "https://data.fixer.io/api";

const PROVIDER_NAME: &str = "fixer.io";

/// Trait for exchange rate providers.
#[async_trait]
pub trait RateProvider: Send + Sync {
    /// Get the provider name.
    fn name(&self) -> &str;

    /// Fetch current rates for the given base currency.
    ///
    /// Issues at most one outbound request per invocation; no retries.
    async fn fetch_rates(&self, base: &Currency) -> FxResult<RateSnapshot>;
}

/// Fixer.io rate provider.
///
/// The API credential is injected from process configuration and checked
/// before any network traffic is attempted.
pub struct FixerProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl FixerProvider {
    /// Create a new provider against the given endpoint.
    pub fn new(
        client: reqwest::Client,
        base_url: impl Into<String>,
        api_key: Option<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            api_key,
        }
    }
}

#[async_trait]
impl RateProvider for FixerProvider {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    async fn fetch_rates(&self, base: &Currency) -> FxResult<RateSnapshot> {
        let key = self
            .api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or(FxError::ApiKeyMissing)?;

        debug!(provider = PROVIDER_NAME, base = %base, "Fetching exchange rates");

        let url = format!("{}/latest", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("access_key", key), ("base", base.code())])
            .send()
            .await
            .map_err(|e| FxError::Transport {
                provider: PROVIDER_NAME.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(
                provider = PROVIDER_NAME,
                status = status.as_u16(),
                "Rate request failed"
            );
            return Err(FxError::BadStatus {
                provider: PROVIDER_NAME.to_string(),
                status: status.as_u16(),
            });
        }

        let payload: FixerPayload = response.json().await.map_err(|e| FxError::Decode {
            provider: PROVIDER_NAME.to_string(),
            message: e.to_string(),
        })?;

        decode_payload(payload)
    }
}

/// Raw Fixer.io response body.
#[derive(Debug, Deserialize)]
struct FixerPayload {
    success: bool,
    timestamp: Option<i64>,
    base: Option<String>,
    date: Option<String>,
    rates: Option<HashMap<String, f64>>,
    error: Option<FixerApiError>,
}

/// Structured error block Fixer returns with `success: false`.
#[derive(Debug, Deserialize)]
struct FixerApiError {
    code: u32,
    #[serde(rename = "type")]
    kind: Option<String>,
    info: Option<String>,
}

fn decode_payload(payload: FixerPayload) -> FxResult<RateSnapshot> {
    if !payload.success {
        let (code, message) = match payload.error {
            Some(e) => (
                e.code,
                e.info
                    .or(e.kind)
                    .unwrap_or_else(|| "unknown provider error".to_string()),
            ),
            None => (0, "unknown provider error".to_string()),
        };
        warn!(provider = PROVIDER_NAME, code, %message, "Provider rejected request");
        return Err(FxError::ProviderRejected {
            provider: PROVIDER_NAME.to_string(),
            code,
            message,
        });
    }

    let rates = payload.rates.ok_or_else(|| FxError::Decode {
        provider: PROVIDER_NAME.to_string(),
        message: "missing rates table".to_string(),
    })?;

    Ok(RateSnapshot {
        success: true,
        timestamp: payload
            .timestamp
            .unwrap_or_else(|| plotrate_common::time::now().timestamp()),
        base: Currency::new(payload.base.unwrap_or_else(|| "EUR".to_string())),
        date: payload.date.unwrap_or_default(),
        rates,
    })
}

/// Mock rate provider for testing.
///
/// Serves a scripted queue of results and counts invocations, so tests can
/// assert exactly how many upstream calls a code path makes.
#[cfg(any(test, feature = "test-utils"))]
pub struct MockRateProvider {
    name: String,
    responses: parking_lot::Mutex<std::collections::VecDeque<FxResult<RateSnapshot>>>,
    requested_bases: parking_lot::Mutex<Vec<Currency>>,
    calls: std::sync::atomic::AtomicUsize,
}

#[cfg(any(test, feature = "test-utils"))]
impl MockRateProvider {
    /// Create a new mock provider.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            responses: parking_lot::Mutex::new(std::collections::VecDeque::new()),
            requested_bases: parking_lot::Mutex::new(Vec::new()),
            calls: std::sync::atomic::AtomicUsize::new(0),
        }
    }

    /// Queue a successful response.
    pub fn push_success(&self, snapshot: RateSnapshot) {
        self.responses.lock().push_back(Ok(snapshot));
    }

    /// Queue a failure.
    pub fn push_failure(&self, error: FxError) {
        self.responses.lock().push_back(Err(error));
    }

    /// Number of fetch invocations so far.
    pub fn calls(&self) -> usize {
        self.calls.load(std::sync::atomic::Ordering::SeqCst)
    }

    /// Base currencies requested, in order.
    pub fn requested_bases(&self) -> Vec<Currency> {
        self.requested_bases.lock().clone()
    }
}

#[cfg(any(test, feature = "test-utils"))]
#[async_trait]
impl RateProvider for MockRateProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch_rates(&self, base: &Currency) -> FxResult<RateSnapshot> {
        self.calls
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        self.requested_bases.lock().push(base.clone());
        self.responses
            .lock()
            .pop_front()
            .unwrap_or_else(|| {
                Err(FxError::Transport {
                    provider: self.name.clone(),
                    message: "no scripted response".to_string(),
                })
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_success_payload() {
        let payload: FixerPayload = serde_json::from_value(json!({
            "success": true,
            "timestamp": 1_700_000_000,
            "base": "EUR",
            "date": "2023-11-14",
            "rates": { "AED": 4.0, "USD": 1.09 }
        }))
        .unwrap();

        let snapshot = decode_payload(payload).unwrap();
        assert!(snapshot.success);
        assert_eq!(snapshot.timestamp, 1_700_000_000);
        assert_eq!(snapshot.base, Currency::eur());
        assert_eq!(snapshot.date, "2023-11-14");
        assert_eq!(snapshot.rate_for("AED"), Some(4.0));
    }

    #[test]
    fn test_decode_provider_error() {
        let payload: FixerPayload = serde_json::from_value(json!({
            "success": false,
            "error": {
                "code": 101,
                "type": "invalid_access_key",
                "info": "You have not supplied a valid API Access Key."
            }
        }))
        .unwrap();

        let err = decode_payload(payload).unwrap_err();
        match err {
            FxError::ProviderRejected { code, message, .. } => {
                assert_eq!(code, 101);
                assert!(message.contains("Access Key"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_decode_missing_rates() {
        let payload: FixerPayload = serde_json::from_value(json!({
            "success": true,
            "timestamp": 1_700_000_000,
            "base": "EUR",
            "date": "2023-11-14"
        }))
        .unwrap();

        assert!(matches!(
            decode_payload(payload),
            Err(FxError::Decode { .. })
        ));
    }

    #[tokio::test]
    async fn test_missing_api_key_fails_before_network() {
        // Unroutable endpoint: reaching it would error differently.
        let provider = FixerProvider::new(
            reqwest::Client::new(),
            "http://127.0.0.1:1/api",
            None,
        );

        let err = provider.fetch_rates(&Currency::eur()).await.unwrap_err();
        assert!(matches!(err, FxError::ApiKeyMissing));
    }

    #[tokio::test]
    async fn test_empty_api_key_rejected() {
        let provider = FixerProvider::new(
            reqwest::Client::new(),
            "http://127.0.0.1:1/api",
            Some(String::new()),
        );

        let err = provider.fetch_rates(&Currency::eur()).await.unwrap_err();
        assert!(matches!(err, FxError::ApiKeyMissing));
    }

    #[tokio::test]
    async fn test_mock_provider_scripting() {
        let provider = MockRateProvider::new("mock");
        let snapshot: RateSnapshot = serde_json::from_value(json!({
            "success": true,
            "timestamp": 1_700_000_000,
            "base": "EUR",
            "date": "2023-11-14",
            "rates": { "AED": 4.0 }
        }))
        .unwrap();

        provider.push_failure(FxError::ApiKeyMissing);
        provider.push_success(snapshot);

        assert!(provider.fetch_rates(&Currency::eur()).await.is_err());
        assert!(provider.fetch_rates(&Currency::aed()).await.is_ok());
        assert_eq!(provider.calls(), 2);
        assert_eq!(
            provider.requested_bases(),
            vec![Currency::eur(), Currency::aed()]
        );

        // Exhausted queue reports a transport failure.
        assert!(matches!(
            provider.fetch_rates(&Currency::eur()).await,
            Err(FxError::Transport { .. })
        ));
    }
}
