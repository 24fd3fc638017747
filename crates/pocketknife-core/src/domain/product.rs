//! Product domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Currency symbol prefixed to every formatted price.
pub const CURRENCY_SYMBOL: &str = "$";

// ─────────────────────────────────────────────────────────────────────────────
// Product Types
// ─────────────────────────────────────────────────────────────────────────────

/// A product that exists in the catalog with a database ID.
///
/// Use `NewProduct` for products that haven't been persisted yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Database ID, assigned by the store and never reused.
    pub id: i64,
    /// Display name. Unique under case-insensitive comparison.
    pub name: String,
    /// Price, never negative.
    pub price: f64,
    /// UTC timestamp of creation.
    pub created_at: DateTime<Utc>,
    /// UTC timestamp of the last price change (creation time if never updated).
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// The price rendered as a currency string, e.g. `$12.99`.
    pub fn formatted_price(&self) -> String {
        format_price(self.price)
    }
}

/// A validated product to be inserted (no ID yet).
///
/// Construct through `ProductService::create`, which normalizes the
/// name and price before handing this to the repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub created_at: DateTime<Utc>,
}

impl NewProduct {
    /// Create a new product stamped with the current time.
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
            created_at: Utc::now(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Price Formatting
// ─────────────────────────────────────────────────────────────────────────────

/// Format a price as the currency symbol followed by exactly two decimals.
///
/// Rounding is half-up on the shortest decimal representation of the
/// value, so `12.995` renders as `$13.00` even though the nearest `f64`
/// sits slightly below it.
///
/// ```rust
/// use pocketknife_core::format_price;
///
/// assert_eq!(format_price(12.995), "$13.00");
/// assert_eq!(format_price(0.0), "$0.00");
/// assert_eq!(format_price(999.99), "$999.99");
/// ```
pub fn format_price(value: f64) -> String {
    if !value.is_finite() {
        return format!("{CURRENCY_SYMBOL}{value}");
    }

    let digits = round_half_up_2dp(value.abs());
    let sign = if value < 0.0 && digits.iter().any(|&d| d != 0) {
        "-"
    } else {
        ""
    };

    let split = digits.len() - 2;
    let whole: String = digits[..split].iter().map(|d| char::from(b'0' + d)).collect();
    let cents: String = digits[split..].iter().map(|d| char::from(b'0' + d)).collect();
    format!("{sign}{CURRENCY_SYMBOL}{whole}.{cents}")
}

/// Round a non-negative finite value to two decimals, half-up.
///
/// Returns the digits of `value * 100`, at least three of them so there is
/// always a whole part.
fn round_half_up_2dp(value: f64) -> Vec<u8> {
    // `Display` for f64 prints the shortest round-trip decimal, never in
    // exponent notation.
    let repr = value.to_string();
    let (whole, frac) = repr.split_once('.').unwrap_or((repr.as_str(), ""));

    let mut digits: Vec<u8> = whole.bytes().map(|b| b - b'0').collect();
    let mut frac_digits = frac.bytes().map(|b| b - b'0');
    digits.push(frac_digits.next().unwrap_or(0));
    digits.push(frac_digits.next().unwrap_or(0));
    let round_up = frac_digits.next().is_some_and(|d| d >= 5);

    if round_up {
        let mut i = digits.len();
        loop {
            if i == 0 {
                digits.insert(0, 1);
                break;
            }
            i -= 1;
            if digits[i] == 9 {
                digits[i] = 0;
            } else {
                digits[i] += 1;
                break;
            }
        }
    }

    // Strip redundant leading zeros but keep one whole digit.
    while digits.len() > 3 && digits[0] == 0 {
        digits.remove(0);
    }
    while digits.len() < 3 {
        digits.insert(0, 0);
    }

    digits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price_examples() {
        assert_eq!(format_price(12.995), "$13.00");
        assert_eq!(format_price(0.0), "$0.00");
        assert_eq!(format_price(999.99), "$999.99");
        assert_eq!(format_price(12.99), "$12.99");
        assert_eq!(format_price(3.5), "$3.50");
        assert_eq!(format_price(200.0), "$200.00");
    }

    #[test]
    fn test_format_price_carries_across_whole_part() {
        assert_eq!(format_price(9.995), "$10.00");
        assert_eq!(format_price(99.999), "$100.00");
        assert_eq!(format_price(0.005), "$0.01");
        assert_eq!(format_price(0.004), "$0.00");
    }

    #[test]
    fn test_format_price_negative_zero_has_no_sign() {
        assert_eq!(format_price(-0.0), "$0.00");
        assert_eq!(format_price(-0.001), "$0.00");
    }

    #[test]
    fn test_format_price_negative_value() {
        assert_eq!(format_price(-1.5), "-$1.50");
    }

    #[test]
    fn test_format_price_large_value() {
        assert_eq!(format_price(1_234_567.891), "$1234567.89");
    }

    #[test]
    fn test_formatted_price_on_product() {
        let product = Product {
            id: 1,
            name: "Coffee".to_string(),
            price: 12.99,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        assert_eq!(product.formatted_price(), "$12.99");
    }
}
