//! Plotrate Common Types
//!
//! This crate contains shared types used across the Plotrate service,
//! including currency codes, time utilities, and the error taxonomy.

pub mod currency;
pub mod error;
pub mod time;

pub use currency::*;
pub use error::*;
pub use time::*;
