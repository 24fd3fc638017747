//! `calc` handler: percentage of an amount.

use pocketknife_core::{CalculationRequest, calculate};

use crate::error::CliError;

const USAGE: &str = "pocket-knife calc <amount> <percentage>";

/// Print `percentage`% of `amount` with two decimals.
pub fn execute(args: &[String]) -> Result<(), CliError> {
    let request = parse_request(args)?;
    let result = calculate(request).map_err(|e| CliError::Calculation(e.to_string()))?;
    println!("{}", result.formatted_value());
    Ok(())
}

/// Turn `<amount> <percentage>` into a request.
///
/// The percentage is checked before the amount.
pub fn parse_request(args: &[String]) -> Result<CalculationRequest, CliError> {
    let (amount, percentage) = match args {
        [amount, percentage] => (amount.as_str(), percentage.as_str()),
        [] | [_] => {
            return Err(CliError::usage(
                format!("Missing arguments. Usage: {USAGE}"),
                Vec::<String>::new(),
            ));
        }
        _ => {
            return Err(CliError::usage(
                format!("Too many arguments. Usage: {USAGE}"),
                Vec::<String>::new(),
            ));
        }
    };

    let percentage = parse_percentage(percentage)?;
    let base = amount.trim().parse::<f64>().map_err(|_| {
        CliError::InvalidInput("Invalid amount. Please provide a numeric value.".to_string())
    })?;

    Ok(CalculationRequest::new(percentage, base))
}

fn parse_percentage(raw: &str) -> Result<u32, CliError> {
    if raw.contains('%') {
        return Err(CliError::InvalidInput(
            "Invalid percentage. Please provide a whole number without the % symbol.".to_string(),
        ));
    }

    let value = raw.trim().parse::<i64>().map_err(|_| {
        CliError::InvalidInput("Invalid percentage. Please provide a whole number.".to_string())
    })?;
    if value < 0 {
        return Err(CliError::InvalidInput(
            "Percentage cannot be negative".to_string(),
        ));
    }

    u32::try_from(value)
        .map_err(|_| CliError::InvalidInput("Percentage is too large".to_string()))
}
