//! Gemini client for pocket-knife's natural-language verbs.
//!
//! Implements `pocketknife_core::LlmClientPort`: a question goes to the
//! model together with the declarations of a `ToolSet`, requested function
//! calls are executed locally, and the model's final text is returned.
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod config;
mod gemini;
mod http;

// ============================================================================
// Public API
// ============================================================================

pub use config::{
    API_KEY_ENV, BASE_URL_ENV, DEFAULT_BASE_URL, DEFAULT_MODEL, LlmClientConfig, MODEL_ENV,
    validate_api_key,
};
pub use gemini::{DefaultGeminiClient, GeminiClient};

// Silence unused dev-dependency warnings
#[cfg(test)]
use tokio_test as _;
