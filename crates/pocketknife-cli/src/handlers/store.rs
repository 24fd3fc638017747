//! `store-product` handler.

use tracing::debug;

use super::{required, usage_error};
use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::format_stored;

const USAGE: &str = "pocket-knife store-product \"<name>\" <price>";
const EXAMPLES: &[&str] = &[
    "pocket-knife store-product \"Coffee\" 12.99",
    "pocket-knife store-product \"Milk\" 3.50",
];

/// Create a product and print its id, name and price.
pub async fn execute(
    ctx: &CliContext,
    name: Option<&str>,
    price: Option<&str>,
) -> Result<(), CliError> {
    let name = required(name, "Missing product name", USAGE, EXAMPLES)?;
    let price = price.ok_or_else(|| usage_error("Missing price argument", USAGE, EXAMPLES))?;

    let product = ctx.products().create(name, price).await?;
    debug!(id = product.id, name = %product.name, "Stored product");

    println!("{}", format_stored(&product));
    Ok(())
}
