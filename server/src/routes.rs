//! HTTP routes for the converter and the exchange rate proxy.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use plotrate_common::{currency, time, Currency};
use plotrate_fx::convert::{
    aed_sqft_to_eur_sqm, eur_sqm_to_aed_sqft, EUR_TO_AED_RATE, SQM_TO_SQFT_RATE,
};
use plotrate_fx::Freshness;

use crate::state::AppState;

/// Conversion request body.
///
/// `value` is accepted as a JSON number or a numeric string; the field names
/// are the ones the shipped client sends.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertRequest {
    pub value: Option<serde_json::Value>,
    pub is_eur_to_mad: Option<bool>,
}

/// Conversion response body, echoing the constants used so the client can
/// render a self-explanatory result.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertResponse {
    pub result: String,
    pub source_value: f64,
    pub exchange_rate: f64,
    pub sqm_to_sqft_rate: f64,
    pub is_eur_to_mad: bool,
}

/// Error body for the converter endpoint.
#[derive(Debug, Serialize)]
pub struct ErrorMessage {
    pub message: String,
}

/// Error body for the rates endpoint.
#[derive(Debug, Serialize)]
pub struct RatesFailure {
    pub success: bool,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Query parameters for the rates endpoint.
#[derive(Debug, Deserialize)]
pub struct RatesQuery {
    pub base: Option<String>,
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/convert", post(convert))
        .route("/api/exchange-rates", get(exchange_rates))
        .route("/health", get(health))
        .route("/metrics", get(metrics))
        .with_state(state)
}

fn bad_request(message: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorMessage {
            message: message.to_string(),
        }),
    )
        .into_response()
}

fn parse_value(raw: &serde_json::Value) -> Option<f64> {
    match raw {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// `POST /api/convert` — property price conversion with fixed rates.
pub async fn convert(State(state): State<AppState>, Json(body): Json<ConvertRequest>) -> Response {
    state.metrics.conversion_requested();

    let (raw, is_eur_to_mad) = match (body.value, body.is_eur_to_mad) {
        (Some(value), Some(direction)) => (value, direction),
        _ => {
            state.metrics.conversion_rejected();
            return bad_request("Missing required parameters");
        }
    };

    let value = match parse_value(&raw) {
        Some(v) if v.is_finite() && v >= 0.0 => v,
        _ => {
            state.metrics.conversion_rejected();
            return bad_request("Invalid value provided");
        }
    };

    let result = if is_eur_to_mad {
        eur_sqm_to_aed_sqft(value, EUR_TO_AED_RATE, SQM_TO_SQFT_RATE)
    } else {
        aed_sqft_to_eur_sqm(value, EUR_TO_AED_RATE, SQM_TO_SQFT_RATE)
    };

    // Validated finite input can still overflow to infinity here.
    if !result.is_finite() {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorMessage {
                message: "An error occurred during the conversion process".to_string(),
            }),
        )
            .into_response();
    }

    Json(ConvertResponse {
        result: format!("{result:.2}"),
        source_value: value,
        exchange_rate: EUR_TO_AED_RATE,
        sqm_to_sqft_rate: SQM_TO_SQFT_RATE,
        is_eur_to_mad,
    })
    .into_response()
}

/// `GET /api/exchange-rates?base=<CODE>` — cached upstream rate proxy.
pub async fn exchange_rates(
    State(state): State<AppState>,
    Query(query): Query<RatesQuery>,
) -> Response {
    state.metrics.rates_requested();

    let base = match query.base {
        Some(code) => {
            let base = Currency::new(code);
            if !base.is_valid() {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(RatesFailure {
                        success: false,
                        error: "VALIDATION_ERROR".to_string(),
                        message: Some(format!("Invalid base currency: {base}")),
                    }),
                )
                    .into_response();
            }
            base
        }
        None => currency::default_base(),
    };

    let was_fresh = state.rates.cache().freshness(time::now()) == Freshness::Fresh;

    match state.rates.current_rates(&base).await {
        Ok(snapshot) => {
            if was_fresh {
                state.metrics.rates_cache_hit();
            } else if state.rates.cache().freshness(time::now()) == Freshness::Fresh {
                state.metrics.rates_refreshed();
            } else {
                state.metrics.rates_stale_served();
            }
            Json(snapshot).into_response()
        }
        Err(e) => {
            state.metrics.rates_failed();
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(RatesFailure {
                    success: false,
                    error: e.error_code().to_string(),
                    message: Some(e.to_string()),
                }),
            )
                .into_response()
        }
    }
}

/// `GET /health` — liveness probe.
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// `GET /metrics` — Prometheus text export.
pub async fn metrics(State(state): State<AppState>) -> String {
    state.metrics.to_prometheus()
}
