//! Pure conversion arithmetic over a rate snapshot

use crate::core::rates::RateSnapshot;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("Enter a valid amount")]
    InvalidAmount,
    #[error("Rates not loaded")]
    RatesUnavailable,
    #[error("Unknown currency code")]
    UnknownCurrency,
}

impl ConversionError {
    /// Stable reason tag for the failure.
    pub fn tag(&self) -> &'static str {
        match self {
            ConversionError::InvalidAmount => "invalid-amount",
            ConversionError::RatesUnavailable => "rates-unavailable",
            ConversionError::UnknownCurrency => "unknown-currency",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conversion {
    pub rate: f64,
    pub value: f64,
}

pub type ConversionResult = Result<Conversion, ConversionError>;

/// Parses user-entered amount text, accepting a comma as decimal separator.
///
/// Returns `None` when there is no usable amount yet, which is different
/// from a zero amount.
pub fn parse_amount(raw: &str) -> Option<f64> {
    let cleaned: String = raw.split_whitespace().collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned
        .replacen(',', ".", 1)
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
}

pub fn cross_rate(snapshot: &RateSnapshot, from: &str, to: &str) -> Option<f64> {
    let base_to_from = snapshot.rates.get(from)?;
    let base_to_to = snapshot.rates.get(to)?;
    Some(base_to_to / base_to_from)
}

pub fn convert(
    snapshot: Option<&RateSnapshot>,
    from: &str,
    to: &str,
    amount: Option<f64>,
) -> ConversionResult {
    let amount = amount.ok_or(ConversionError::InvalidAmount)?;
    let snapshot = snapshot.ok_or(ConversionError::RatesUnavailable)?;
    let rate = cross_rate(snapshot, from, to).ok_or(ConversionError::UnknownCurrency)?;
    Ok(Conversion {
        rate,
        value: amount * rate,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::collections::HashMap;

    fn snapshot(rates: &[(&str, f64)]) -> RateSnapshot {
        RateSnapshot {
            base: "EUR".to_string(),
            date: None,
            rates: rates
                .iter()
                .map(|(code, rate)| (code.to_string(), *rate))
                .collect::<HashMap<_, _>>(),
            fetched_at: Utc::now(),
        }
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("1.5"), Some(1.5));
        assert_eq!(parse_amount("1,5"), Some(1.5));
        assert_eq!(parse_amount("  42 "), Some(42.0));
        assert_eq!(parse_amount("1 000"), Some(1000.0));
        assert_eq!(parse_amount("0"), Some(0.0));
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("   "), None);
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount("inf"), None);
        assert_eq!(parse_amount("NaN"), None);
        assert_eq!(parse_amount("1,000,5"), None);
    }

    #[test]
    fn test_cross_rate_is_reciprocal() {
        let s = snapshot(&[("EUR", 1.0), ("USD", 1.0832), ("JPY", 168.41), ("GBP", 0.8567)]);
        for a in ["EUR", "USD", "JPY", "GBP"] {
            for b in ["EUR", "USD", "JPY", "GBP"] {
                let there = cross_rate(&s, a, b).unwrap();
                let back = cross_rate(&s, b, a).unwrap();
                assert!((there * back - 1.0).abs() < 1e-12, "{a}->{b}");
            }
            assert_eq!(cross_rate(&s, a, a), Some(1.0));
        }
    }

    #[test]
    fn test_cross_rate_unknown_code() {
        let s = snapshot(&[("EUR", 1.0), ("USD", 1.1)]);
        assert_eq!(cross_rate(&s, "EUR", "XYZ"), None);
        assert_eq!(cross_rate(&s, "XYZ", "USD"), None);
        assert_eq!(cross_rate(&s, "eur", "USD"), None);
    }

    #[test]
    fn test_convert_success() {
        let s = snapshot(&[("EUR", 1.0), ("USD", 1.1)]);
        let result = convert(Some(&s), "EUR", "USD", Some(10.0)).unwrap();
        assert!((result.rate - 1.1).abs() < 1e-12);
        assert!((result.value - 11.0).abs() < 1e-9);
    }

    #[test]
    fn test_convert_same_currency() {
        let s = snapshot(&[("EUR", 1.0), ("USD", 1.1)]);
        let result = convert(Some(&s), "USD", "USD", Some(7.25)).unwrap();
        assert_eq!(result.rate, 1.0);
        assert_eq!(result.value, 7.25);
    }

    #[test]
    fn test_convert_failures_in_order() {
        let s = snapshot(&[("EUR", 1.0), ("USD", 1.1)]);

        assert_eq!(
            convert(Some(&s), "EUR", "USD", None),
            Err(ConversionError::InvalidAmount)
        );
        assert_eq!(
            convert(None, "EUR", "USD", None),
            Err(ConversionError::InvalidAmount)
        );
        assert_eq!(
            convert(None, "EUR", "USD", Some(10.0)),
            Err(ConversionError::RatesUnavailable)
        );
        assert_eq!(
            convert(Some(&s), "EUR", "XYZ", Some(10.0)),
            Err(ConversionError::UnknownCurrency)
        );
    }

    #[test]
    fn test_error_tags() {
        assert_eq!(ConversionError::InvalidAmount.tag(), "invalid-amount");
        assert_eq!(ConversionError::RatesUnavailable.tag(), "rates-unavailable");
        assert_eq!(ConversionError::UnknownCurrency.tag(), "unknown-currency");
    }
}
