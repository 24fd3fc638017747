//! `list-products` handler.

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::{EMPTY_CATALOG_MESSAGE, format_product_table};

/// Print every product ordered by name.
pub async fn execute(ctx: &CliContext) -> Result<(), CliError> {
    let products = ctx.products().all().await?;

    if products.is_empty() {
        println!("{EMPTY_CATALOG_MESSAGE}");
        return Ok(());
    }

    println!("{}", format_product_table(&products));
    Ok(())
}
