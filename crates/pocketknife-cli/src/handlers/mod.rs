//! Command handlers.
//!
//! Handlers follow one pattern:
//! - Signature: `pub async fn execute(ctx: &CliContext, ...) -> Result<(), CliError>`
//! - Check CLI-level argument presence and report usage errors
//! - Delegate to `ProductService` (or the LLM client) for the actual work
//! - Print the result through `presentation`
//!
//! Handlers never open the database; the router passes them a context.

pub mod ask;
pub mod ask_product;
pub mod calc;
pub mod delete;
pub mod get;
pub mod list;
pub mod store;
pub mod update;

#[cfg(test)]
pub(crate) mod test_support;

use crate::error::CliError;

/// Return the trimmed argument if present and not blank, else a usage error.
pub(crate) fn required<'a>(
    value: Option<&'a str>,
    message: &str,
    usage: &str,
    examples: &[&str],
) -> Result<&'a str, CliError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.trim()),
        _ => Err(usage_error(message, usage, examples)),
    }
}

/// Usage error with a usage line and indented examples.
pub(crate) fn usage_error(message: &str, usage: &str, examples: &[&str]) -> CliError {
    let mut hints = vec![format!("Usage: {usage}"), String::new(), "Examples:".to_string()];
    hints.extend(examples.iter().map(|e| format!("  {e}")));
    CliError::usage(message, hints)
}
