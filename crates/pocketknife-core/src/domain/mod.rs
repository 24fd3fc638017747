//! Domain types for pocket-knife.
//!
//! These types represent the product catalog independent of any
//! infrastructure concerns (database, HTTP, terminal).

mod product;

pub use product::{NewProduct, Product, format_price};
