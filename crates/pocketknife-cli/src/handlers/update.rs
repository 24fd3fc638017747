//! `update-product` handler.

use super::{required, usage_error};
use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::format_updated;

const USAGE: &str = "pocket-knife update-product \"<name>\" <new_price>";
const EXAMPLES: &[&str] = &[
    "pocket-knife update-product \"Coffee\" 15.99",
    "pocket-knife update-product \"Laptop\" 899.00",
];

/// Change a product's price and print the old and new values.
///
/// Existence is checked before the new price is validated, so an unknown
/// name reports not-found even when the price is also bad.
pub async fn execute(
    ctx: &CliContext,
    name: Option<&str>,
    new_price: Option<&str>,
) -> Result<(), CliError> {
    let name = required(name, "Product name required", USAGE, EXAMPLES)?;
    let new_price =
        new_price.ok_or_else(|| usage_error("New price required", USAGE, EXAMPLES))?;

    let existing = ctx
        .products()
        .find_by_name(name)
        .await?
        .ok_or_else(|| CliError::NotFound {
            name: name.to_string(),
        })?;
    let old_price = existing.formatted_price();

    let updated = ctx.products().update_price(name, new_price).await?;

    println!("{}", format_updated(&old_price, &updated));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::{context, seed};

    #[tokio::test]
    async fn test_update_changes_price() {
        let (_db, ctx) = context().await;
        seed(&ctx, "Coffee", "12.99").await;

        execute(&ctx, Some("COFFEE"), Some("15.99")).await.unwrap();

        let product = ctx.products().find_by_name("coffee").await.unwrap().unwrap();
        assert_eq!(product.name, "Coffee");
        assert_eq!(product.formatted_price(), "$15.99");
    }

    #[tokio::test]
    async fn test_update_unknown_is_not_found_and_creates_nothing() {
        let (_db, ctx) = context().await;

        let err = execute(&ctx, Some(" Ghost  "), Some("abc")).await.unwrap_err();
        assert_eq!(err.to_string(), "Product 'Ghost' not found");
        assert_eq!(ctx.products().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_update_invalid_price_exits_two() {
        let (_db, ctx) = context().await;
        seed(&ctx, "Coffee", "12.99").await;

        let err = execute(&ctx, Some("Coffee"), Some("-1")).await.unwrap_err();
        assert_eq!(err.exit_code(), 2);

        let product = ctx.products().find_by_name("Coffee").await.unwrap().unwrap();
        assert_eq!(product.formatted_price(), "$12.99");
    }

    #[tokio::test]
    async fn test_update_missing_arguments() {
        let (_db, ctx) = context().await;

        let err = execute(&ctx, Some("Coffee"), None).await.unwrap_err();
        assert!(matches!(err, CliError::Usage { ref message, .. } if message == "New price required"));

        let err = execute(&ctx, Some(""), Some("1")).await.unwrap_err();
        assert!(matches!(err, CliError::Usage { ref message, .. } if message == "Product name required"));
    }
}
