//! Validation and normalization of user-supplied product fields.
//!
//! Every function here is pure. Failures carry the offending field name
//! and value so adapters can report them without extra context.

use thiserror::Error;

/// Field label used when the product name is invalid.
pub const NAME_FIELD: &str = "Product name";
/// Field label used when a product price is invalid.
pub const PRICE_FIELD: &str = "Price";
/// Field label for the lower bound of a price filter.
pub const MIN_PRICE_FIELD: &str = "min_price";
/// Field label for the upper bound of a price filter.
pub const MAX_PRICE_FIELD: &str = "max_price";

/// A malformed or out-of-range user-supplied value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Value was absent or blank after trimming.
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    /// Value could not be parsed as a finite number.
    #[error("{field} must be a valid number (got '{value}')")]
    NotANumber { field: &'static str, value: String },

    /// Value parsed but is below zero.
    #[error("{field} must be a positive number (got {value})")]
    Negative { field: &'static str, value: String },

    /// Lower bound exceeds upper bound.
    #[error("min_price ({min}) cannot be greater than max_price ({max})")]
    InvertedRange { min: String, max: String },
}

impl ValidationError {
    /// Name of the field that failed validation.
    pub const fn field(&self) -> &'static str {
        match self {
            Self::Empty { field } | Self::NotANumber { field, .. } | Self::Negative { field, .. } => {
                field
            }
            Self::InvertedRange { .. } => MIN_PRICE_FIELD,
        }
    }
}

/// Validate a product name, returning it trimmed.
///
/// Fails if the name is absent or blank after trimming.
///
/// ```rust
/// use pocketknife_core::validate_name;
///
/// assert_eq!(validate_name("  Coffee ").unwrap(), "Coffee");
/// assert!(validate_name("   ").is_err());
/// assert!(validate_name(None).is_err());
/// ```
pub fn validate_name<'a>(raw: impl Into<Option<&'a str>>) -> Result<String, ValidationError> {
    match raw.into().map(str::trim) {
        Some(name) if !name.is_empty() => Ok(name.to_string()),
        _ => Err(ValidationError::Empty { field: NAME_FIELD }),
    }
}

/// Parse and validate a price. Zero is valid, negatives are not.
pub fn validate_price(raw: &str) -> Result<f64, ValidationError> {
    parse_non_negative(PRICE_FIELD, raw)
}

/// Parse and validate a `[min, max]` price range.
///
/// Each bound is validated independently before the ordering check.
pub fn validate_range(min_raw: &str, max_raw: &str) -> Result<(f64, f64), ValidationError> {
    let min = parse_non_negative(MIN_PRICE_FIELD, min_raw)?;
    let max = parse_non_negative(MAX_PRICE_FIELD, max_raw)?;
    check_range(min, max)
}

/// Parse `raw` as a finite, non-negative number.
pub fn parse_non_negative(field: &'static str, raw: &str) -> Result<f64, ValidationError> {
    let trimmed = raw.trim();
    let value = trimmed
        .parse::<f64>()
        .map_err(|_| ValidationError::NotANumber {
            field,
            value: raw.to_string(),
        })?;
    check_non_negative(field, value).map_err(|err| match err {
        ValidationError::NotANumber { field, .. } => ValidationError::NotANumber {
            field,
            value: raw.to_string(),
        },
        other => other,
    })
}

/// Validate an already-numeric value as finite and non-negative.
///
/// Negative zero is normalized to zero.
pub fn check_non_negative(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NotANumber {
            field,
            value: value.to_string(),
        });
    }
    if value < 0.0 {
        return Err(ValidationError::Negative {
            field,
            value: value.to_string(),
        });
    }
    Ok(value + 0.0)
}

/// Validate that `min <= max` for two already-validated bounds.
pub fn check_range(min: f64, max: f64) -> Result<(f64, f64), ValidationError> {
    let min = check_non_negative(MIN_PRICE_FIELD, min)?;
    let max = check_non_negative(MAX_PRICE_FIELD, max)?;
    if min > max {
        return Err(ValidationError::InvertedRange {
            min: min.to_string(),
            max: max.to_string(),
        });
    }
    Ok((min, max))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name_trims() {
        assert_eq!(validate_name("Coffee").unwrap(), "Coffee");
        assert_eq!(validate_name("\tGreen Tea \n").unwrap(), "Green Tea");
    }

    #[test]
    fn test_validate_name_rejects_blank_and_absent() {
        assert_eq!(
            validate_name(""),
            Err(ValidationError::Empty { field: NAME_FIELD })
        );
        assert!(validate_name("    ").is_err());
        assert!(validate_name(None).is_err());
    }

    #[test]
    fn test_validate_price_accepts_zero_and_decimals() {
        assert_eq!(validate_price("0").unwrap(), 0.0);
        assert_eq!(validate_price("12.99").unwrap(), 12.99);
        assert_eq!(validate_price(" 3.50 ").unwrap(), 3.5);
        assert_eq!(validate_price("1e2").unwrap(), 100.0);
    }

    #[test]
    fn test_validate_price_negative_zero_is_zero() {
        let price = validate_price("-0").unwrap();
        assert_eq!(price, 0.0);
        assert!(price.is_sign_positive());
    }

    #[test]
    fn test_validate_price_rejects_garbage() {
        let err = validate_price("abc").unwrap_err();
        assert_eq!(
            err,
            ValidationError::NotANumber {
                field: PRICE_FIELD,
                value: "abc".to_string()
            }
        );
        assert!(err.to_string().contains("must be a valid number"));
        assert!(validate_price("").is_err());
        assert!(validate_price("$12").is_err());
    }

    #[test]
    fn test_validate_price_rejects_non_finite() {
        assert!(matches!(
            validate_price("NaN"),
            Err(ValidationError::NotANumber { .. })
        ));
        assert!(matches!(
            validate_price("inf"),
            Err(ValidationError::NotANumber { value, .. }) if value == "inf"
        ));
    }

    #[test]
    fn test_validate_price_rejects_negative() {
        let err = validate_price("-5").unwrap_err();
        assert!(matches!(err, ValidationError::Negative { .. }));
        assert!(err.to_string().contains("must be a positive number"));
        assert_eq!(err.field(), PRICE_FIELD);
    }

    #[test]
    fn test_validate_range() {
        assert_eq!(validate_range("1", "5").unwrap(), (1.0, 5.0));
        assert_eq!(validate_range("2.5", "2.5").unwrap(), (2.5, 2.5));
        assert!(matches!(
            validate_range("5", "1"),
            Err(ValidationError::InvertedRange { .. })
        ));
    }

    #[test]
    fn test_validate_range_checks_each_bound() {
        let err = validate_range("-1", "5").unwrap_err();
        assert_eq!(err.field(), MIN_PRICE_FIELD);
        let err = validate_range("1", "x").unwrap_err();
        assert_eq!(err.field(), MAX_PRICE_FIELD);
    }
}
