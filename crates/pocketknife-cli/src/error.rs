//! CLI-specific error types and mappings.
//!
//! Every handler returns [`CliError`]. `main` prints it with
//! [`CliError::report`] and exits with [`CliError::exit_code`].

use pocketknife_core::{CoreError, LlmError};
use thiserror::Error;

const CALC_FALLBACK: &str = "For direct calculations, use: pocket-knife calc <amount> <percentage>";
const PRODUCT_FALLBACK: &str = "For direct product commands, use: pocket-knife list-products";
const API_KEY_URL: &str = "https://makersuite.google.com/app/apikey";

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Missing or surplus arguments.
    #[error("{message}")]
    Usage { message: String, hints: Vec<String> },

    /// A user-supplied value failed validation.
    #[error("{0}")]
    InvalidInput(String),

    #[error("Product '{name}' not found")]
    NotFound { name: String },

    #[error("Product \"{name}\" already exists")]
    DuplicateName { name: String },

    /// The product database could not be opened.
    #[error("Storage features are not available")]
    StorageUnavailable(String),

    /// The percentage arithmetic rejected its operands.
    #[error("{0}")]
    Calculation(String),

    /// A language-model request failed; the message is already user-facing.
    #[error("{message}")]
    Llm {
        message: String,
        hints: Vec<String>,
        exit_code: u8,
    },

    #[error("An unexpected error occurred")]
    Unexpected(String),
}

impl CliError {
    /// Usage error with hint lines printed beneath the message.
    pub fn usage<I, S>(message: impl Into<String>, hints: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Usage {
            message: message.into(),
            hints: hints.into_iter().map(Into::into).collect(),
        }
    }

    /// Map error to the process exit code.
    ///
    /// - 0: Success (never produced here)
    /// - 1: Usage, lookup, storage and runtime errors
    /// - 2: Invalid input values
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::InvalidInput(_) => 2,
            Self::Llm { exit_code, .. } => *exit_code,
            Self::Usage { .. }
            | Self::NotFound { .. }
            | Self::DuplicateName { .. }
            | Self::StorageUnavailable(_)
            | Self::Calculation(_)
            | Self::Unexpected(_) => 1,
        }
    }

    /// Follow-up lines shown under the error message.
    ///
    /// An empty string renders as a blank separator line.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Usage { hints, .. } | Self::Llm { hints, .. } => hints.clone(),
            Self::DuplicateName { .. } => {
                vec!["Use a different name or update the existing product.".to_string()]
            }
            Self::StorageUnavailable(details) => vec![
                format!("Details: {details}"),
                String::new(),
                "For calculations without storage, use:".to_string(),
                "  pocket-knife calc <amount> <percentage>".to_string(),
            ],
            Self::Unexpected(details) => vec![format!("Details: {details}")],
            Self::InvalidInput(_) | Self::NotFound { .. } | Self::Calculation(_) => Vec::new(),
        }
    }

    /// Write the error and its suggestions to stderr.
    pub fn report(&self) {
        eprintln!();
        eprintln!("Error: {self}");
        for line in self.suggestions() {
            if line.is_empty() {
                eprintln!();
            } else {
                eprintln!("  {line}");
            }
        }
    }

    /// Map a language-model failure for the given verb.
    pub fn from_llm(err: LlmError, verb: LlmVerb) -> Self {
        let fallback = verb.fallback().to_string();
        let transient = verb.transient_exit_code();

        let (message, hints, exit_code) = match &err {
            LlmError::MissingApiKey | LlmError::InvalidApiKey => (
                err.to_string(),
                vec![format!("Get a free key at: {API_KEY_URL}"), fallback],
                1,
            ),
            LlmError::Network(details) => (
                "Network error: Unable to connect to Gemini API.".to_string(),
                vec![
                    "Please check your internet connection and try again.".to_string(),
                    fallback,
                    format!("(Details: {details})"),
                ],
                transient,
            ),
            LlmError::Timeout(_) => (
                "Request timeout: The API took too long to respond.".to_string(),
                vec!["Please try again later.".to_string(), fallback],
                transient,
            ),
            LlmError::Authentication(_) => (
                "Authentication failed: Invalid or expired API key.".to_string(),
                vec![
                    "Please verify your GEMINI_API_KEY is correct.".to_string(),
                    format!("Get a new key at: {API_KEY_URL}"),
                    fallback,
                ],
                1,
            ),
            LlmError::RateLimited(_) => (
                "Rate limit exceeded: Too many requests to Gemini API.".to_string(),
                vec![
                    "Please wait a moment and try again, or upgrade your API plan.".to_string(),
                    fallback,
                ],
                transient,
            ),
            LlmError::Api { status, message } if *status == 400 || *status == 404 => (
                "Configuration error: Invalid model or provider settings.".to_string(),
                vec![
                    "Please check POCKET_KNIFE_LLM_MODEL and POCKET_KNIFE_LLM_BASE_URL.".to_string(),
                    fallback,
                    format!("(Details: {message})"),
                ],
                1,
            ),
            LlmError::Api { .. } | LlmError::InvalidResponse(_) => (
                format!("LLM error: {err}"),
                vec![
                    "An unexpected error occurred while processing your request.".to_string(),
                    fallback,
                ],
                transient,
            ),
        };

        Self::Llm {
            message,
            hints,
            exit_code,
        }
    }
}

/// The verb a language-model request was made for.
///
/// `ask` treats transient API failures as exit code 2; `ask-product`
/// reports every failure with exit code 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LlmVerb {
    Ask,
    AskProduct,
}

impl LlmVerb {
    /// Suggested non-LLM alternative.
    pub const fn fallback(self) -> &'static str {
        match self {
            Self::Ask => CALC_FALLBACK,
            Self::AskProduct => PRODUCT_FALLBACK,
        }
    }

    const fn transient_exit_code(self) -> u8 {
        match self {
            Self::Ask => 2,
            Self::AskProduct => 1,
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidInput(e) => Self::InvalidInput(e.to_string()),
            CoreError::NotFound { name } => Self::NotFound { name },
            CoreError::DuplicateName { name } => Self::DuplicateName { name },
            CoreError::BackendUnavailable(msg) => Self::StorageUnavailable(msg),
            CoreError::Unexpected(msg) => Self::Unexpected(msg),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Unexpected(err.to_string())
    }
}
