//! Monetary values as the Storefront API represents them.

use serde::{Deserialize, Serialize};

/// A price from the API: decimal amount string plus ISO currency code.
///
/// Amounts stay as strings end to end; the frontend formats, never
/// computes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Money {
    pub amount: String,
    pub currency_code: String,
}

impl Money {
    /// Create a money value.
    pub fn new(amount: impl Into<String>, currency_code: impl Into<String>) -> Self {
        Self {
            amount: amount.into(),
            currency_code: currency_code.into(),
        }
    }

    /// Display string for the price, e.g. `$49.99` or `49.99 PLN`.
    pub fn format(&self) -> String {
        match self.currency_code.as_str() {
            "USD" => format!("${}", self.amount),
            "EUR" => format!("\u{20ac}{}", self.amount),
            "GBP" => format!("\u{00a3}{}", self.amount),
            "CAD" => format!("CA${}", self.amount),
            "AUD" => format!("A${}", self.amount),
            "PLN" => format!("{} z\u{142}", self.amount),
            code => format!("{} {}", self.amount, code),
        }
    }

    /// Numeric amount, for comparisons only.
    pub fn amount_value(&self) -> f64 {
        self.amount.parse().unwrap_or(0.0)
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.format())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_known_symbols() {
        assert_eq!(Money::new("49.99", "USD").format(), "$49.99");
        assert_eq!(Money::new("120.00", "PLN").format(), "120.00 z\u{142}");
    }

    #[test]
    fn test_format_unknown_code() {
        assert_eq!(Money::new("900", "SEK").format(), "900 SEK");
    }

    #[test]
    fn test_amount_value_tolerates_garbage() {
        assert_eq!(Money::new("not-a-number", "USD").amount_value(), 0.0);
    }
}
