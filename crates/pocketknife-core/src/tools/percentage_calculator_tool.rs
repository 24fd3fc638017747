//! Percentage calculator exposed to the language model.

use async_trait::async_trait;
use serde_json::Value;

use super::args;
use crate::calculator::{CalculationRequest, calculate};
use crate::ports::{ParameterKind, ToolDefinition, ToolSet};

const CALCULATE_PERCENTAGE: &str = "calculate_percentage";

/// Answers "what is X% of Y" questions for the model.
#[derive(Debug, Default, Clone, Copy)]
pub struct PercentageCalculatorTool;

impl PercentageCalculatorTool {
    pub const fn new() -> Self {
        Self
    }

    /// Compute `percentage`% of `base`, formatted with two decimals.
    ///
    /// Fractional percentages are truncated toward zero, so `20.7` is
    /// treated as `20`.
    pub fn calculate_percentage(&self, base: f64, percentage: f64) -> String {
        if !percentage.is_finite() || percentage < 0.0 {
            return format!(
                "Error: Percentage must be a non-negative whole number (got {percentage})"
            );
        }
        if percentage > f64::from(u32::MAX) {
            return format!("Error: Percentage is too large (got {percentage})");
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let whole = percentage.trunc() as u32;

        match calculate(CalculationRequest::new(whole, base)) {
            Ok(result) => result.formatted_value(),
            Err(e) => format!("Error: {e}"),
        }
    }
}

#[async_trait]
impl ToolSet for PercentageCalculatorTool {
    fn definitions(&self) -> Vec<ToolDefinition> {
        vec![
            ToolDefinition::new(
                CALCULATE_PERCENTAGE,
                "Calculate what percentage of a number equals. \
                 For example, to find 20% of 100, use base=100 and percentage=20.",
            )
            .param(
                "base",
                ParameterKind::Number,
                "The base amount to calculate from (e.g., 100)",
            )
            .param(
                "percentage",
                ParameterKind::Number,
                "The percentage to calculate as a whole number (e.g., 20 for 20%)",
            ),
        ]
    }

    async fn call(&self, name: &str, args: &Value) -> String {
        if name != CALCULATE_PERCENTAGE {
            return format!("Error: unknown function '{name}'");
        }

        match (args::number(args, "base"), args::number(args, "percentage")) {
            (Ok(base), Ok(percentage)) => self.calculate_percentage(base, percentage),
            (Err(e), _) | (_, Err(e)) => format!("Error: {e}"),
        }
    }
}
