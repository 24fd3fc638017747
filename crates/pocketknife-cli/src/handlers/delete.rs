//! `delete-product` handler.

use tracing::debug;

use super::required;
use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::format_deleted;
use crate::utils::input::ConfirmationProvider;

const USAGE: &str = "pocket-knife delete-product \"<name>\"";
const EXAMPLES: &[&str] = &[
    "pocket-knife delete-product \"Coffee\"",
    "pocket-knife delete-product \"Laptop\"",
];

/// Delete a product after an interactive yes/no confirmation.
///
/// Declining is a successful outcome and leaves the store untouched.
pub async fn execute(
    ctx: &CliContext,
    name: Option<&str>,
    confirm: &dyn ConfirmationProvider,
) -> Result<(), CliError> {
    let name = required(name, "Product name required", USAGE, EXAMPLES)?;

    let product = ctx
        .products()
        .find_by_name(name)
        .await?
        .ok_or_else(|| CliError::NotFound {
            name: name.to_string(),
        })?;

    println!(
        "Delete product '{}' ({})?",
        product.name,
        product.formatted_price()
    );
    if !confirm.confirm("Are you sure? (y/n): ")? {
        debug!(name = %product.name, "Deletion declined");
        println!("Deletion cancelled");
        return Ok(());
    }

    let removed = ctx.products().delete(name).await?;

    println!("{}", format_deleted(&removed));
    Ok(())
}
