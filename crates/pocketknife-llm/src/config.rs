//! Public configuration for the Gemini client.

use std::env;
use std::time::Duration;

use pocketknife_core::LlmError;

/// Environment variable holding the Gemini API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";
/// Environment variable overriding the model name.
pub const MODEL_ENV: &str = "POCKET_KNIFE_LLM_MODEL";
/// Environment variable overriding the API base URL.
pub const BASE_URL_ENV: &str = "POCKET_KNIFE_LLM_BASE_URL";

/// Model used when `POCKET_KNIFE_LLM_MODEL` is unset.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash-exp";
/// Gemini REST endpoint root.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Configuration for the Gemini client.
///
/// # Example
///
/// ```
/// use pocketknife_llm::LlmClientConfig;
/// use std::time::Duration;
///
/// let config = LlmClientConfig::new("AIzaSyExampleKey_123")
///     .with_model("gemini-1.5-flash")
///     .with_timeout(Duration::from_secs(10));
/// assert_eq!(config.model(), "gemini-1.5-flash");
/// ```
#[derive(Debug, Clone)]
pub struct LlmClientConfig {
    pub(crate) api_key: String,
    pub(crate) model: String,
    pub(crate) base_url: String,
    pub(crate) timeout: Duration,
    /// Maximum number of tool-call round trips before giving up
    pub(crate) max_tool_rounds: u8,
    /// Maximum retry attempts for transient errors
    pub(crate) max_retries: u8,
    pub(crate) retry_base_delay: Duration,
}

impl LlmClientConfig {
    /// Create a configuration with default settings for `api_key`.
    ///
    /// The key is used as given; see [`LlmClientConfig::from_env`] for
    /// validated loading.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            max_tool_rounds: 5,
            max_retries: 2,
            retry_base_delay: Duration::from_millis(500),
        }
    }

    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// `LlmError::MissingApiKey` when `GEMINI_API_KEY` is unset or blank,
    /// `LlmError::InvalidApiKey` when it is malformed.
    pub fn from_env() -> Result<Self, LlmError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Same as [`LlmClientConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, LlmError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = validate_api_key(lookup(API_KEY_ENV).as_deref())?;

        let mut config = Self::new(api_key);
        if let Some(model) = lookup(MODEL_ENV).filter(|m| !m.trim().is_empty()) {
            config = config.with_model(model.trim());
        }
        if let Some(url) = lookup(BASE_URL_ENV).filter(|u| !u.trim().is_empty()) {
            config = config.with_base_url(url.trim());
        }
        Ok(config)
    }

    /// Set the model name.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the API base URL. A trailing slash is ignored.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the per-request timeout.
    ///
    /// Defaults to 30 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the maximum number of tool-call round trips.
    ///
    /// Defaults to 5.
    #[must_use]
    pub const fn with_max_tool_rounds(mut self, rounds: u8) -> Self {
        self.max_tool_rounds = rounds;
        self
    }

    /// Set the maximum number of retries for transient errors.
    ///
    /// Defaults to 2.
    #[must_use]
    pub const fn with_max_retries(mut self, retries: u8) -> Self {
        self.max_retries = retries;
        self
    }

    /// Set the base delay for exponential backoff retries.
    #[must_use]
    pub const fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_base_delay = delay;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Validate a raw API key value.
///
/// Surrounding whitespace is trimmed. The trimmed key must be non-empty,
/// must not be wrapped in quotes, must not contain line breaks and must
/// consist only of ASCII letters, digits, `_` and `-`.
///
/// # Errors
///
/// `MissingApiKey` for an absent or blank key, `InvalidApiKey` otherwise.
pub fn validate_api_key(raw: Option<&str>) -> Result<String, LlmError> {
    let key = raw.map(str::trim).unwrap_or_default();
    if key.is_empty() {
        return Err(LlmError::MissingApiKey);
    }

    let quoted = key.starts_with(['"', '\'']) || key.ends_with(['"', '\'']);
    let multiline = key.contains(['\n', '\r']);
    let charset_ok = key
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');

    if quoted || multiline || !charset_ok {
        return Err(LlmError::InvalidApiKey);
    }
    Ok(key.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = LlmClientConfig::new("key");
        assert_eq!(config.model(), DEFAULT_MODEL);
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.max_tool_rounds, 5);
    }

    #[test]
    fn test_validate_api_key_accepts_trimmed_key() {
        assert_eq!(
            validate_api_key(Some("  AIza-Sy_123  ")).unwrap(),
            "AIza-Sy_123"
        );
    }

    #[test]
    fn test_validate_api_key_missing() {
        assert!(matches!(
            validate_api_key(None),
            Err(LlmError::MissingApiKey)
        ));
        assert!(matches!(
            validate_api_key(Some("   ")),
            Err(LlmError::MissingApiKey)
        ));
    }

    #[test]
    fn test_validate_api_key_rejects_malformed_keys() {
        for bad in ["\"abc123\"", "'abc123'", "abc\n123", "abc 123", "abc.123"] {
            assert!(
                matches!(validate_api_key(Some(bad)), Err(LlmError::InvalidApiKey)),
                "expected {bad:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_from_lookup_reads_overrides() {
        let config = LlmClientConfig::from_lookup(lookup(&[
            (API_KEY_ENV, "abc123"),
            (MODEL_ENV, "gemini-1.5-pro"),
            (BASE_URL_ENV, "http://localhost:9999/v1beta/"),
        ]))
        .unwrap();

        assert_eq!(config.api_key, "abc123");
        assert_eq!(config.model(), "gemini-1.5-pro");
        assert_eq!(config.base_url(), "http://localhost:9999/v1beta");
    }

    #[test]
    fn test_from_lookup_without_key_fails() {
        let err = LlmClientConfig::from_lookup(lookup(&[(MODEL_ENV, "x")])).unwrap_err();
        assert!(matches!(err, LlmError::MissingApiKey));
    }
}
