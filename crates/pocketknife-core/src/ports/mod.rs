//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `sqlx` or `reqwest` types in any signature
//! - Repository traits are CRUD-focused; validation lives in services
//! - The LLM port is a single `ask` entry point plus the tools it may call

pub mod llm;
pub mod product_repository;

use thiserror::Error;

use crate::validation::ValidationError;

pub use llm::{LlmClientPort, LlmError, ParameterKind, ToolDefinition, ToolParameter, ToolSet};
pub use product_repository::ProductRepository;

/// Domain-specific errors for repository operations.
///
/// This error type abstracts away storage implementation details (e.g., sqlx errors)
/// and provides a clean interface for services to handle storage failures.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The requested product was not found. Carries the lookup name.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A product with the same case-insensitive name already exists.
    #[error("Already exists: {0}")]
    AlreadyExists(String),

    /// Storage backend error (I/O, driver, corrupt row).
    #[error("Storage error: {0}")]
    Storage(String),

    /// A non-uniqueness constraint was violated (e.g., the price check).
    #[error("Constraint violation: {0}")]
    Constraint(String),
}

/// Core error type for semantic domain errors.
///
/// Adapters map this to their own error types (CLI exit codes,
/// inline tool responses).
#[derive(Debug, Error)]
pub enum CoreError {
    /// A user-supplied value was malformed or out of range.
    #[error(transparent)]
    InvalidInput(#[from] ValidationError),

    /// The referenced product does not exist.
    #[error("Product '{name}' not found")]
    NotFound { name: String },

    /// Create collided with an existing case-insensitive name.
    #[error("Product \"{name}\" already exists")]
    DuplicateName { name: String },

    /// The storage engine could not be initialized.
    #[error("Storage backend unavailable: {0}")]
    BackendUnavailable(String),

    /// Any other runtime failure.
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl From<RepositoryError> for CoreError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(name) => Self::NotFound { name },
            RepositoryError::AlreadyExists(name) => Self::DuplicateName { name },
            RepositoryError::Storage(msg) | RepositoryError::Constraint(msg) => {
                Self::Unexpected(msg)
            }
        }
    }
}
