//! Model client traits consumed by the pipeline and the relay.
//!
//! Both components depend only on these abstractions; the concrete
//! OpenAI-compatible client lives in [`crate::openai`]. Implementations
//! must be `Send + Sync` so one client can serve concurrent requests.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::ServiceError;
use crate::types::AudioChunk;

/// One request to a generative text model.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// Fixed system instruction describing schema and content rules.
    pub system: String,
    /// User payload: the brief serialized as structured text.
    pub user_payload: String,
    /// Caller subject, passed through for attribution/audit.
    pub caller_id: String,
    /// Ask the model for strictly machine-parseable output (no prose
    /// wrapper).
    pub structured_output: bool,
}

impl CompletionRequest {
    pub fn structured(
        system: impl Into<String>,
        user_payload: impl Into<String>,
        caller_id: impl Into<String>,
    ) -> Self {
        Self {
            system: system.into(),
            user_payload: user_payload.into(),
            caller_id: caller_id.into(),
            structured_output: true,
        }
    }
}

/// One request to a speech-to-text model.
#[derive(Debug, Clone)]
pub struct TranscriptionRequest {
    pub audio: AudioChunk,
    /// Target language hint, e.g. `"de"`.
    pub language: String,
}

/// A generative text model that accepts a prompt and returns text.
///
/// `Ok(None)` means the model answered with an empty or missing response
/// body — distinct from a transport error and handled terminally by the
/// pipeline.
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    async fn complete(&self, request: CompletionRequest) -> Result<Option<String>, ServiceError>;
}

/// A speech-to-text model that accepts audio bytes and returns text.
#[async_trait]
pub trait TranscriptionModel: Send + Sync {
    async fn transcribe(&self, request: TranscriptionRequest) -> Result<String, ServiceError>;
}

#[async_trait]
impl<T: GenerativeModel + ?Sized> GenerativeModel for &T {
    async fn complete(&self, request: CompletionRequest) -> Result<Option<String>, ServiceError> {
        (**self).complete(request).await
    }
}

#[async_trait]
impl<T: TranscriptionModel + ?Sized> TranscriptionModel for &T {
    async fn transcribe(&self, request: TranscriptionRequest) -> Result<String, ServiceError> {
        (**self).transcribe(request).await
    }
}

#[async_trait]
impl<T: GenerativeModel + ?Sized> GenerativeModel for Arc<T> {
    async fn complete(&self, request: CompletionRequest) -> Result<Option<String>, ServiceError> {
        (**self).complete(request).await
    }
}

#[async_trait]
impl<T: TranscriptionModel + ?Sized> TranscriptionModel for Arc<T> {
    async fn transcribe(&self, request: TranscriptionRequest) -> Result<String, ServiceError> {
        (**self).transcribe(request).await
    }
}
