//! Shared CLI presentation utilities.
//!
//! Format-only helpers that turn products into terminal text. Handlers
//! decide what to print; these functions decide how it looks.

pub mod product_display;
pub mod tables;

// Re-export commonly used items
pub use product_display::{
    format_deleted, format_details, format_stored, format_timestamp, format_updated,
};
pub use tables::{EMPTY_CATALOG_MESSAGE, format_product_table};
