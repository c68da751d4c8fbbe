//! Currency code type for the Plotrate service.

use serde::{Deserialize, Serialize};
use std::fmt;

/// ISO 4217 currency code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Currency(String);

impl Currency {
    /// Create a new currency from code.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().to_uppercase())
    }

    /// Get the code as a string slice.
    pub fn code(&self) -> &str {
        &self.0
    }

    /// Validate the currency code format.
    pub fn is_valid(&self) -> bool {
        self.0.len() == 3 && self.0.chars().all(|c| c.is_ascii_uppercase())
    }

    /// Euro.
    pub fn eur() -> Self {
        Self("EUR".to_string())
    }

    /// UAE dirham.
    pub fn aed() -> Self {
        Self("AED".to_string())
    }

    /// US dollar.
    pub fn usd() -> Self {
        Self("USD".to_string())
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Currency {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Currency {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// Base currency used when a request does not specify one.
pub fn default_base() -> Currency {
    Currency::eur()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_uppercased() {
        let c = Currency::new("eur");
        assert_eq!(c.code(), "EUR");
        assert_eq!(c, Currency::eur());
    }

    #[test]
    fn test_currency_validation() {
        assert!(Currency::eur().is_valid());
        assert!(Currency::new("aed").is_valid());
        assert!(!Currency::new("EU").is_valid());
        assert!(!Currency::new("EURO").is_valid());
        assert!(!Currency::new("E$R").is_valid());
        assert!(!Currency::new("").is_valid());
    }

    #[test]
    fn test_serde_transparent() {
        let json = serde_json::to_string(&Currency::aed()).unwrap();
        assert_eq!(json, "\"AED\"");

        let back: Currency = serde_json::from_str("\"eur\"").unwrap();
        // Deserialization does not normalize; codes on the wire are upper case.
        assert_eq!(back.code(), "eur");
    }
}
