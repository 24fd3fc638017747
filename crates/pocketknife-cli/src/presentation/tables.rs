//! Table formatting for product listings.

use pocketknife_core::Product;

/// Shown by `list-products` when nothing is stored.
pub const EMPTY_CATALOG_MESSAGE: &str = "No products stored yet.";

const HEADER: &str = "ID   Name                 Price";
const SEPARATOR: &str = "--   ----                 -----";

/// Render products as a fixed-width table, one row per product.
///
/// Names longer than the column are printed in full and push the price
/// column to the right.
///
/// ```rust
/// use chrono::Utc;
/// use pocketknife_cli::presentation::format_product_table;
/// use pocketknife_core::Product;
///
/// let now = Utc::now();
/// let coffee = Product {
///     id: 1,
///     name: "Coffee".to_string(),
///     price: 12.99,
///     created_at: now,
///     updated_at: now,
/// };
/// let table = format_product_table(&[coffee]);
/// assert!(table.ends_with("1    Coffee               $12.99"));
/// ```
pub fn format_product_table(products: &[Product]) -> String {
    let mut lines = Vec::with_capacity(products.len() + 2);
    lines.push(HEADER.to_string());
    lines.push(SEPARATOR.to_string());
    lines.extend(products.iter().map(|p| {
        format!("{:<4} {:<20} {}", p.id, p.name, p.formatted_price())
    }));
    lines.join("\n")
}
