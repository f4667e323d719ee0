//! Error handling for the caseforge core.
//!
//! Every error carries a machine-readable `code()` and an HTTP-style
//! `status_code()` so hosts can map failures onto their wire format
//! without matching on variants.

use crate::types::CaseStudyBrief;
use thiserror::Error;

/// Errors raised by the generation pipeline, the transcription relay,
/// and the concrete model clients.
#[derive(Error, Debug, Clone)]
pub enum ServiceError {
    /// Caller does not hold a role permitting the operation.
    #[error("access denied: caller lacks required role '{role}'")]
    AccessDenied { role: String },

    /// The brief failed input validation before any model call was made.
    #[error("invalid case study brief: {0}")]
    InvalidBrief(String),

    /// Model output parsed or validated badly against the document
    /// schema. Consumed by the retry loop; only surfaces if it escapes
    /// the pipeline.
    #[error("invalid case study format")]
    InvalidDocumentFormat { raw: String },

    /// The model returned no usable content. Terminal, never retried.
    #[error("failed to generate case study for '{}'", brief.title)]
    GenerationFailed { brief: CaseStudyBrief },

    /// Retry budget consumed without a valid document.
    #[error("max retries exceeded generating case study for '{}'", brief.title)]
    GenerationExhausted { brief: CaseStudyBrief },

    /// Per-chunk transcription failure. Contained by the relay.
    #[error("transcription failed: {0}")]
    Transcription(String),

    /// Client-side configuration problem (e.g. missing API key).
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Transport-level HTTP failure.
    #[error("HTTP error: {0}")]
    Http(String),

    /// JSON (de)serialization failure outside the document schema path.
    #[error("JSON error: {0}")]
    Json(String),

    /// Non-success response from the model provider.
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },
}

impl ServiceError {
    /// Machine-readable error code, stable across releases.
    pub fn code(&self) -> &'static str {
        match self {
            Self::AccessDenied { .. } => "ACCESS_DENIED",
            Self::InvalidBrief(_) => "INVALID_CASE_STUDY_INFO",
            Self::InvalidDocumentFormat { .. } => "INVALID_CASE_STUDY_FORMAT",
            Self::GenerationFailed { .. } => "GENERATE_CASE_STUDY_FAILED",
            Self::GenerationExhausted { .. } => "MAX_RETRIES_EXCEEDED",
            Self::Transcription(_) => "TRANSCRIPTION_FAILED",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Http(_) => "HTTP_ERROR",
            Self::Json(_) => "JSON_ERROR",
            Self::Api { .. } => "PROVIDER_API_ERROR",
        }
    }

    /// HTTP-style status: client-input-shaped failures map to 4xx,
    /// exhaustion and model failures to 5xx.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::AccessDenied { .. } => 403,
            Self::InvalidBrief(_) | Self::InvalidDocumentFormat { .. } => 400,
            Self::Api { status, .. } => *status,
            Self::GenerationFailed { .. }
            | Self::GenerationExhausted { .. }
            | Self::Transcription(_)
            | Self::Configuration(_)
            | Self::Http(_)
            | Self::Json(_) => 500,
        }
    }

    /// Whether the pipeline may re-roll after this failure. Only
    /// content-shape failures are retryable; transport and provider
    /// errors propagate immediately.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::InvalidDocumentFormat { .. })
    }
}

impl From<reqwest::Error> for ServiceError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err.to_string())
    }
}

impl From<serde_json::Error> for ServiceError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type for caseforge operations.
pub type Result<T> = std::result::Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn brief() -> CaseStudyBrief {
        CaseStudyBrief::new("Launch", "Acme", "Retail", "notes")
    }

    #[test]
    fn codes_are_stable() {
        assert_eq!(
            ServiceError::InvalidDocumentFormat { raw: "{}".into() }.code(),
            "INVALID_CASE_STUDY_FORMAT"
        );
        assert_eq!(
            ServiceError::GenerationExhausted { brief: brief() }.code(),
            "MAX_RETRIES_EXCEEDED"
        );
        assert_eq!(
            ServiceError::GenerationFailed { brief: brief() }.code(),
            "GENERATE_CASE_STUDY_FAILED"
        );
    }

    #[test]
    fn status_mapping() {
        assert_eq!(
            ServiceError::AccessDenied { role: "admin".into() }.status_code(),
            403
        );
        assert_eq!(ServiceError::InvalidBrief("title".into()).status_code(), 400);
        assert_eq!(
            ServiceError::GenerationExhausted { brief: brief() }.status_code(),
            500
        );
        assert_eq!(
            ServiceError::Api {
                status: 429,
                message: "rate limited".into()
            }
            .status_code(),
            429
        );
    }

    #[test]
    fn only_format_failures_are_retryable() {
        assert!(ServiceError::InvalidDocumentFormat { raw: String::new() }.is_retryable());
        assert!(!ServiceError::GenerationFailed { brief: brief() }.is_retryable());
        assert!(!ServiceError::Http("timeout".into()).is_retryable());
    }

    #[test]
    fn from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: ServiceError = json_err.into();
        assert!(matches!(err, ServiceError::Json(_)));
    }
}
