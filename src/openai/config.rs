//! OpenAI client configuration.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use crate::defaults;
use crate::error::ServiceError;

/// Configuration for [`super::OpenAiClient`].
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    pub(crate) api_key: SecretString,
    pub(crate) base_url: String,
    pub(crate) chat_model: String,
    pub(crate) stt_model: String,
    pub(crate) timeout: Duration,
}

impl OpenAiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::from(api_key.into()),
            base_url: defaults::BASE_URL.to_string(),
            chat_model: defaults::CHAT_MODEL.to_string(),
            stt_model: defaults::STT_MODEL.to_string(),
            timeout: Duration::from_secs(defaults::REQUEST_TIMEOUT_SECS),
        }
    }

    /// Read the API key from `OPENAI_API_KEY`.
    pub fn from_env() -> Result<Self, ServiceError> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .map_err(|_| ServiceError::Configuration("OPENAI_API_KEY not set".to_string()))?;
        Ok(Self::new(api_key))
    }

    /// Point the client at another OpenAI-compatible endpoint.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_chat_model(mut self, model: impl Into<String>) -> Self {
        self.chat_model = model.into();
        self
    }

    pub fn with_stt_model(mut self, model: impl Into<String>) -> Self {
        self.stt_model = model.into();
        self
    }

    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub(crate) fn bearer_token(&self) -> &str {
        self.api_key.expose_secret()
    }
}
