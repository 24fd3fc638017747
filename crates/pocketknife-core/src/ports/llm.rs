//! Language-model port.
//!
//! The CLI only needs `ask(query) -> text`. The model may call back into
//! a `ToolSet` any number of times before it answers; tool calls always
//! produce text so the conversation can continue.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Client for a remote tool-calling language model.
#[async_trait]
pub trait LlmClientPort: Send + Sync {
    /// Ask a natural-language question, letting the model call `tools`.
    ///
    /// Returns the model's final answer with surrounding whitespace trimmed.
    async fn ask(&self, query: &str, tools: &dyn ToolSet) -> Result<String, LlmError>;
}

/// A set of functions exposed to the model.
#[async_trait]
pub trait ToolSet: Send + Sync {
    /// Declarations sent to the model with every request.
    fn definitions(&self) -> Vec<ToolDefinition>;

    /// Execute the named function. Never fails: errors are described inline.
    async fn call(&self, name: &str, args: &Value) -> String;
}

/// Declaration of a single callable function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub parameters: Vec<ToolParameter>,
}

impl ToolDefinition {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters: Vec::new(),
        }
    }

    /// Add a required parameter.
    #[must_use]
    pub fn param(
        mut self,
        name: impl Into<String>,
        kind: ParameterKind,
        description: impl Into<String>,
    ) -> Self {
        self.parameters.push(ToolParameter {
            name: name.into(),
            kind,
            description: description.into(),
        });
        self
    }
}

/// A required parameter of a tool function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolParameter {
    pub name: String,
    pub kind: ParameterKind,
    pub description: String,
}

/// JSON type of a tool parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterKind {
    String,
    Number,
}

/// Errors from the language-model client.
#[derive(Debug, Error)]
pub enum LlmError {
    /// No API key is configured.
    #[error("No API key configured. Set GEMINI_API_KEY in .env file or environment variable.")]
    MissingApiKey,

    /// The configured API key is malformed.
    #[error("Invalid API key format. Remove quotes and ensure no extra spaces.")]
    InvalidApiKey,

    /// The API could not be reached.
    #[error("Network error: {0}")]
    Network(String),

    /// The API did not answer in time.
    #[error("Request timeout: {0}")]
    Timeout(String),

    /// The API rejected the credentials.
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// The API refused the request because of quota or rate limits.
    #[error("Rate limit exceeded: {0}")]
    RateLimited(String),

    /// Any other non-success API status.
    #[error("API request failed with status {status}: {message}")]
    Api { status: u16, message: String },

    /// The API answered with something we could not interpret.
    #[error("Invalid response from LLM API: {0}")]
    InvalidResponse(String),
}
