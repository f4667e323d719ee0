//! HTTP client for OpenAI-compatible chat completion and transcription
//! endpoints.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde_json::json;

use super::OpenAiConfig;
use crate::error::ServiceError;
use crate::traits::{
    CompletionRequest, GenerativeModel, TranscriptionModel, TranscriptionRequest,
};

/// Client for an OpenAI-compatible API, implementing both model traits.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    config: OpenAiConfig,
    http: reqwest::Client,
}

impl OpenAiClient {
    pub fn new(config: OpenAiConfig) -> Result<Self, ServiceError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ServiceError::Configuration(e.to_string()))?;
        Ok(Self { config, http })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    /// Turn a non-success response into `Api { status, message }`,
    /// pulling the provider's `error.message` when the body has one.
    async fn error_for(response: reqwest::Response) -> ServiceError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| {
                v.pointer("/error/message")
                    .and_then(|m| m.as_str())
                    .map(str::to_string)
            })
            .unwrap_or(body);
        ServiceError::Api { status, message }
    }
}

#[async_trait]
impl GenerativeModel for OpenAiClient {
    async fn complete(&self, request: CompletionRequest) -> Result<Option<String>, ServiceError> {
        let mut body = json!({
            "model": self.config.chat_model,
            "messages": [
                { "role": "system", "content": request.system },
                { "role": "user", "content": request.user_payload },
            ],
            "user": request.caller_id,
        });
        if request.structured_output {
            body["response_format"] = json!({ "type": "json_object" });
        }

        tracing::debug!(
            target: "caseforge::openai",
            model = %self.config.chat_model,
            user = %request.caller_id,
            "sending chat completion request"
        );

        let response = self
            .http
            .post(self.endpoint("/chat/completions"))
            .bearer_auth(self.config.bearer_token())
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_for(response).await);
        }

        let payload: serde_json::Value = response.json().await?;
        let content = payload
            .pointer("/choices/0/message/content")
            .and_then(|v| v.as_str())
            .filter(|s| !s.is_empty())
            .map(str::to_string);
        Ok(content)
    }
}

#[async_trait]
impl TranscriptionModel for OpenAiClient {
    async fn transcribe(&self, request: TranscriptionRequest) -> Result<String, ServiceError> {
        let file = Part::bytes(request.audio.data)
            .file_name(request.audio.format.file_name())
            .mime_str(request.audio.format.mime_type())
            .map_err(|e| ServiceError::Transcription(e.to_string()))?;
        let form = Form::new()
            .part("file", file)
            .text("model", self.config.stt_model.clone())
            .text("language", request.language)
            .text("response_format", "json");

        let response = self
            .http
            .post(self.endpoint("/audio/transcriptions"))
            .bearer_auth(self.config.bearer_token())
            .multipart(form)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_for(response).await);
        }

        let payload: serde_json::Value = response.json().await?;
        payload
            .get("text")
            .and_then(|v| v.as_str())
            .map(str::to_string)
            .ok_or_else(|| {
                ServiceError::Transcription(
                    "missing 'text' field in transcription response".to_string(),
                )
            })
    }
}
