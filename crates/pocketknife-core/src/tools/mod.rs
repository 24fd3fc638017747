//! Tool sets exposed to the language model.
//!
//! Each tool converts every failure into descriptive text so the model
//! always receives an answer it can relay.

mod args;
mod percentage_calculator_tool;
mod product_query_tool;

pub use percentage_calculator_tool::PercentageCalculatorTool;
pub use product_query_tool::ProductQueryTool;
