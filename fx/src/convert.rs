//! Property price conversion arithmetic.
//!
//! Pure functions over `f64`; validation is the caller's job, and results
//! inherit IEEE 754 semantics when a rate is zero or negative.

/// Fixed exchange rate used by the converter (1 EUR = 4.0 AED).
pub const EUR_TO_AED_RATE: f64 = 4.0;

/// Area conversion rate (1 m² = 10.764 ft²).
pub const SQM_TO_SQFT_RATE: f64 = 10.764;

/// Convert a price in EUR per square meter to AED per square foot.
///
/// `exchange_rate` is "1 EUR = rate AED"; `sqm_to_sqft` is "1 m² = rate ft²".
pub fn eur_sqm_to_aed_sqft(value: f64, exchange_rate: f64, sqm_to_sqft: f64) -> f64 {
    (value * exchange_rate) / sqm_to_sqft
}

/// Convert a price in AED per square foot to EUR per square meter.
///
/// Algebraic inverse of [`eur_sqm_to_aed_sqft`] for fixed rates.
pub fn aed_sqft_to_eur_sqm(value: f64, exchange_rate: f64, sqm_to_sqft: f64) -> f64 {
    (value * sqm_to_sqft) / exchange_rate
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_eur_sqm_to_aed_sqft() {
        let result = eur_sqm_to_aed_sqft(100.0, EUR_TO_AED_RATE, SQM_TO_SQFT_RATE);
        // 100 EUR/m² * 4.0 / 10.764 ft²/m²
        assert!((result - 37.1609).abs() < 0.0001);
    }

    #[test]
    fn test_aed_sqft_to_eur_sqm() {
        let result = aed_sqft_to_eur_sqm(100.0, EUR_TO_AED_RATE, SQM_TO_SQFT_RATE);
        // 100 AED/ft² * 10.764 / 4.0
        assert!((result - 269.1).abs() < 0.0001);
    }

    #[test]
    fn test_zero_value() {
        assert_eq!(
            eur_sqm_to_aed_sqft(0.0, EUR_TO_AED_RATE, SQM_TO_SQFT_RATE),
            0.0
        );
        assert_eq!(
            aed_sqft_to_eur_sqm(0.0, EUR_TO_AED_RATE, SQM_TO_SQFT_RATE),
            0.0
        );
    }

    proptest! {
        #[test]
        fn round_trip_recovers_input(
            value in 0.0f64..1e9,
            rate in 0.01f64..1000.0,
            area in 0.01f64..1000.0,
        ) {
            let converted = eur_sqm_to_aed_sqft(value, rate, area);
            let back = aed_sqft_to_eur_sqm(converted, rate, area);
            prop_assert!((back - value).abs() <= value.abs() * 1e-9 + 1e-9);
        }
    }
}
