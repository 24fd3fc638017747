//! Percentage calculation.

use std::fmt;

use thiserror::Error;

/// Calculation failure for a request that passed parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalculationError {
    #[error("Amount must be a finite number")]
    NonFiniteBase,
}

/// "What is `percentage`% of `base`?"
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculationRequest {
    pub percentage: u32,
    pub base: f64,
}

impl CalculationRequest {
    pub const fn new(percentage: u32, base: f64) -> Self {
        Self { percentage, base }
    }
}

/// Result of a percentage calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationResult {
    pub value: f64,
    pub request: CalculationRequest,
}

impl CalculationResult {
    /// The value with exactly two decimals, e.g. `30.00`.
    pub fn formatted_value(&self) -> String {
        format!("{:.2}", self.value)
    }
}

impl fmt::Display for CalculationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted_value())
    }
}

/// Compute `percentage / 100 * base`.
pub fn calculate(request: CalculationRequest) -> Result<CalculationResult, CalculationError> {
    if !request.base.is_finite() {
        return Err(CalculationError::NonFiniteBase);
    }
    let value = f64::from(request.percentage) / 100.0 * request.base;
    Ok(CalculationResult { value, request })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_examples() {
        let result = calculate(CalculationRequest::new(15, 200.0)).unwrap();
        assert_eq!(result.to_string(), "30.00");

        let result = calculate(CalculationRequest::new(10, 99.99)).unwrap();
        assert_eq!(result.formatted_value(), "10.00");

        let result = calculate(CalculationRequest::new(20, 45.50)).unwrap();
        assert_eq!(result.formatted_value(), "9.10");
    }

    #[test]
    fn test_calculate_zero_and_negative_base() {
        assert_eq!(
            calculate(CalculationRequest::new(0, 500.0))
                .unwrap()
                .formatted_value(),
            "0.00"
        );
        assert_eq!(
            calculate(CalculationRequest::new(50, -10.0))
                .unwrap()
                .formatted_value(),
            "-5.00"
        );
    }

    #[test]
    fn test_calculate_rejects_non_finite_base() {
        assert_eq!(
            calculate(CalculationRequest::new(10, f64::INFINITY)),
            Err(CalculationError::NonFiniteBase)
        );
    }
}
