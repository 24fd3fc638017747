//! `get-product` handler.

use super::required;
use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::format_details;

const USAGE: &str = "pocket-knife get-product \"<name>\"";
const EXAMPLES: &[&str] = &[
    "pocket-knife get-product \"Coffee\"",
    "pocket-knife get-product \"Laptop\"",
];

/// Print one product looked up case-insensitively.
pub async fn execute(ctx: &CliContext, name: Option<&str>) -> Result<(), CliError> {
    let name = required(name, "Product name required", USAGE, EXAMPLES)?;

    let product = ctx
        .products()
        .find_by_name(name)
        .await?
        .ok_or_else(|| CliError::NotFound {
            name: name.to_string(),
        })?;

    println!("{}", format_details(&product));
    Ok(())
}
