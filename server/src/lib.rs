//! Plotrate Server
//!
//! HTTP surface for the property price converter: the conversion endpoint,
//! the cached exchange rate proxy, and operational routes.

pub mod config;
pub mod metrics;
pub mod routes;
pub mod state;

pub use config::ServerConfig;
pub use state::AppState;
