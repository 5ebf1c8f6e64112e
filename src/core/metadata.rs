//! Display metadata for common currencies

use crate::core::rates::RateSnapshot;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyMeta {
    pub code: &'static str,
    pub name: &'static str,
    pub symbol: &'static str,
    pub symbol_native: &'static str,
    pub decimal_digits: usize,
}

const fn meta(
    code: &'static str,
    name: &'static str,
    symbol: &'static str,
    symbol_native: &'static str,
    decimal_digits: usize,
) -> CurrencyMeta {
    CurrencyMeta {
        code,
        name,
        symbol,
        symbol_native,
        decimal_digits,
    }
}

pub const CURRENCIES: &[CurrencyMeta] = &[
    meta("AUD", "Australian Dollar", "AU$", "$", 2),
    meta("BGN", "Bulgarian Lev", "BGN", "лв.", 2),
    meta("BRL", "Brazilian Real", "R$", "R$", 2),
    meta("CAD", "Canadian Dollar", "CA$", "$", 2),
    meta("CHF", "Swiss Franc", "CHF", "CHF", 2),
    meta("CNY", "Chinese Yuan", "CN¥", "CN¥", 2),
    meta("CZK", "Czech Republic Koruna", "Kč", "Kč", 2),
    meta("DKK", "Danish Krone", "Dkr", "kr", 2),
    meta("EUR", "Euro", "€", "€", 2),
    meta("GBP", "British Pound Sterling", "£", "£", 2),
    meta("HKD", "Hong Kong Dollar", "HK$", "$", 2),
    meta("HUF", "Hungarian Forint", "Ft", "Ft", 0),
    meta("IDR", "Indonesian Rupiah", "Rp", "Rp", 0),
    meta("ILS", "Israeli New Sheqel", "₪", "₪", 2),
    meta("INR", "Indian Rupee", "Rs", "₹", 2),
    meta("ISK", "Icelandic Króna", "Ikr", "kr", 0),
    meta("JPY", "Japanese Yen", "¥", "￥", 0),
    meta("KRW", "South Korean Won", "₩", "₩", 0),
    meta("MXN", "Mexican Peso", "MX$", "$", 2),
    meta("MYR", "Malaysian Ringgit", "RM", "RM", 2),
    meta("NOK", "Norwegian Krone", "Nkr", "kr", 2),
    meta("NZD", "New Zealand Dollar", "NZ$", "$", 2),
    meta("PHP", "Philippine Peso", "₱", "₱", 2),
    meta("PLN", "Polish Zloty", "zł", "zł", 2),
    meta("RON", "Romanian Leu", "RON", "RON", 2),
    meta("SEK", "Swedish Krona", "Skr", "kr", 2),
    meta("SGD", "Singapore Dollar", "S$", "$", 2),
    meta("THB", "Thai Baht", "฿", "฿", 2),
    meta("TRY", "Turkish Lira", "TL", "TL", 2),
    meta("USD", "US Dollar", "$", "$", 2),
    meta("ZAR", "South African Rand", "R", "R", 2),
];

pub fn lookup(code: &str) -> Option<&'static CurrencyMeta> {
    CURRENCIES.iter().find(|c| c.code == code)
}

/// Codes the user may pick from: known metadata codes, plus every code in the
/// rate table once one is loaded.
pub fn available_currencies(snapshot: Option<&RateSnapshot>) -> Vec<String> {
    let mut codes: BTreeSet<String> = CURRENCIES.iter().map(|c| c.code.to_string()).collect();
    if let Some(snapshot) = snapshot {
        codes.extend(snapshot.rates.keys().cloned());
    }
    codes.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::collections::HashMap;

    #[test]
    fn test_lookup() {
        let jpy = lookup("JPY").unwrap();
        assert_eq!(jpy.decimal_digits, 0);
        assert_eq!(jpy.symbol_native, "￥");
        assert!(lookup("XYZ").is_none());
        assert!(lookup("usd").is_none());
    }

    #[test]
    fn test_codes_are_sorted_and_unique() {
        let codes: Vec<&str> = CURRENCIES.iter().map(|c| c.code).collect();
        let mut sorted = codes.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(codes, sorted);
    }

    #[test]
    fn test_available_currencies_without_snapshot() {
        let codes = available_currencies(None);
        assert_eq!(codes.len(), CURRENCIES.len());
        assert_eq!(codes.first().map(String::as_str), Some("AUD"));
    }

    #[test]
    fn test_available_currencies_merges_rate_codes() {
        let snapshot = RateSnapshot {
            base: "EUR".to_string(),
            date: None,
            rates: HashMap::from([
                ("EUR".to_string(), 1.0),
                ("USD".to_string(), 1.1),
                ("XAU".to_string(), 0.0004),
            ]),
            fetched_at: Utc::now(),
        };
        let codes = available_currencies(Some(&snapshot));
        assert_eq!(codes.len(), CURRENCIES.len() + 1);
        assert!(codes.contains(&"XAU".to_string()));
        assert!(codes.windows(2).all(|w| w[0] < w[1]));
    }
}
