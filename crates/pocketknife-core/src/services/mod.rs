//! Services that orchestrate domain operations over injected ports.

mod product_service;

pub use product_service::ProductService;
