//! Core domain for pocket-knife.
//!
//! Holds the product catalog domain types, input validation, the port
//! traits that storage and LLM adapters implement, and the services that
//! sit on top of those ports. No `sqlx` or `reqwest` types appear here.
#![deny(unused_crate_dependencies)]

pub mod calculator;
pub mod domain;
pub mod paths;
pub mod ports;
pub mod services;
pub mod tools;
pub mod validation;

#[cfg(test)]
mod test_support;

// Re-export commonly used types for convenience
pub use calculator::{CalculationError, CalculationRequest, CalculationResult, calculate};
pub use domain::{NewProduct, Product, format_price};
pub use paths::{DATA_DIR_ENV, PathError, data_root, database_path, env_file_path};
pub use ports::{
    CoreError, LlmClientPort, LlmError, ParameterKind, ProductRepository, RepositoryError,
    ToolDefinition, ToolParameter, ToolSet,
};
pub use services::ProductService;
pub use tools::{PercentageCalculatorTool, ProductQueryTool};
pub use validation::{ValidationError, validate_name, validate_price, validate_range};
