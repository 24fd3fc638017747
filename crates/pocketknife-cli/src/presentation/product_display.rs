//! Multi-line product summaries printed after each product verb.

use chrono::{DateTime, Utc};

use pocketknife_core::Product;

/// Timestamp as shown by `get-product`, e.g. `2024-05-01 09:30:00`.
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Confirmation for `store-product`, framed by blank lines.
pub fn format_stored(product: &Product) -> String {
    [
        String::new(),
        "✓ Product stored successfully".to_string(),
        format!("  Name:  {}", product.name),
        format!("  Price: {}", product.formatted_price()),
        format!("  ID:    {}", product.id),
        String::new(),
    ]
    .join("\n")
}

/// Details for `get-product`.
pub fn format_details(product: &Product) -> String {
    [
        format!("Product: {}", product.name),
        format!("Price: {}", product.formatted_price()),
        format!("ID: {}", product.id),
        format!("Created: {}", format_timestamp(&product.created_at)),
    ]
    .join("\n")
}

/// Confirmation for `update-product`.
pub fn format_updated(old_price: &str, product: &Product) -> String {
    [
        "✓ Product price updated".to_string(),
        format!("  Product:   {}", product.name),
        format!("  Old Price: {old_price}"),
        format!("  New Price: {}", product.formatted_price()),
    ]
    .join("\n")
}

/// Confirmation for `delete-product`.
pub fn format_deleted(product: &Product) -> String {
    [
        "✓ Product deleted successfully".to_string(),
        format!("  Name:  {}", product.name),
        format!("  Price: {}", product.formatted_price()),
    ]
    .join("\n")
}
