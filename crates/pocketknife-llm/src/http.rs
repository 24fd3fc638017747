//! HTTP backend abstraction for the Gemini API.
//!
//! The client is generic over [`HttpBackend`] so the tool-calling loop can
//! be tested against canned responses. The production backend uses reqwest
//! and retries transient failures with exponential backoff.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use pocketknife_core::LlmError;

use crate::config::LlmClientConfig;
use crate::gemini::types::{ErrorEnvelope, GenerateContentRequest, GenerateContentResponse};

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Sends one `generateContent` request.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    async fn generate(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, LlmError>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest with retry logic.
pub struct ReqwestBackend {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    max_retries: u8,
    retry_base_delay: Duration,
}

impl ReqwestBackend {
    /// Create a backend for the configured model.
    pub fn new(config: &LlmClientConfig) -> Result<Self, LlmError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("pocket-knife/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| LlmError::Network(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: format!(
                "{}/models/{}:generateContent",
                config.base_url, config.model
            ),
            api_key: config.api_key.clone(),
            max_retries: config.max_retries,
            retry_base_delay: config.retry_base_delay,
        })
    }

    async fn send_once(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, LlmError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header("x-goog-api-key", &self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| classify_transport_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(classify_status(status.as_u16(), &body));
        }

        response
            .json::<GenerateContentResponse>()
            .await
            .map_err(|e| LlmError::InvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn generate(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, LlmError> {
        let mut attempt: u8 = 0;
        loop {
            match self.send_once(request).await {
                Err(e) if is_retryable(&e) && attempt < self.max_retries => {
                    attempt += 1;
                    let delay = self.retry_base_delay * 2u32.pow(u32::from(attempt) - 1);
                    warn!(error = %e, attempt, "Transient Gemini API error, retrying");
                    tokio::time::sleep(delay).await;
                }
                other => {
                    debug!(attempts = attempt + 1, ok = other.is_ok(), "Gemini request finished");
                    return other;
                }
            }
        }
    }
}

const fn is_retryable(err: &LlmError) -> bool {
    match err {
        LlmError::Network(_) => true,
        LlmError::Api { status, .. } => *status >= 500,
        _ => false,
    }
}

/// Map a transport-level failure to an `LlmError`.
fn classify_transport_error(err: &reqwest::Error) -> LlmError {
    if err.is_timeout() {
        LlmError::Timeout("The API took too long to respond.".to_string())
    } else if err.is_connect() || err.is_request() {
        LlmError::Network(format!("Unable to connect to Gemini API ({err})"))
    } else if err.is_decode() {
        LlmError::InvalidResponse(err.to_string())
    } else {
        LlmError::Network(err.to_string())
    }
}

/// Map a non-success HTTP status and body to an `LlmError`.
pub(crate) fn classify_status(status: u16, body: &str) -> LlmError {
    let (message, api_status) = match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => (envelope.error.message, envelope.error.status),
        Err(_) => (body.trim().to_string(), None),
    };
    let lowered = message.to_lowercase();
    let api_status = api_status.unwrap_or_default();

    if status == 401
        || status == 403
        || api_status == "UNAUTHENTICATED"
        || api_status == "PERMISSION_DENIED"
        || lowered.contains("api key")
    {
        return LlmError::Authentication(message);
    }
    if status == 429
        || api_status == "RESOURCE_EXHAUSTED"
        || lowered.contains("quota")
        || lowered.contains("rate limit")
    {
        return LlmError::RateLimited(message);
    }
    if status == 408 || status == 504 || api_status == "DEADLINE_EXCEEDED" {
        return LlmError::Timeout(message);
    }
    LlmError::Api { status, message }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================
