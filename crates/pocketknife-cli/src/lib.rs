//! Command-line adapter for pocket-knife.
//!
//! Parses arguments with `clap`, wires the storage and LLM adapters in
//! [`bootstrap`], and routes each verb to a handler in [`handlers`].
//! Every failure surfaces as a [`CliError`] carrying its exit code.
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

#[cfg(test)]
use assert_cmd as _;
#[cfg(test)]
use async_trait as _;
#[cfg(test)]
use predicates as _;
#[cfg(test)]
use tempfile as _;
#[cfg(test)]
use tokio_test as _;

// The runtime itself is started in main.rs
use tokio as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod parser;
pub mod presentation;
pub mod router;
pub mod utils;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap, load_env};
pub use commands::Commands;
pub use error::{CliError, LlmVerb};
pub use parser::Cli;
pub use router::run;
pub use utils::input::{ConfirmationProvider, StdinConfirmation};
