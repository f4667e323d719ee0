//! Document generation pipeline.
//!
//! Builds a prompt from a [`CaseStudyBrief`], invokes the generative
//! model, validates the returned text against the document schema, and
//! re-rolls on non-conforming output up to a bound. Generative JSON is
//! known to occasionally come back malformed; the bound keeps cost and
//! latency finite when the model misbehaves persistently.

mod prompt;

use uuid::Uuid;

use crate::auth::{AuthenticatedIdentity, Role, require_role};
use crate::config::GeneratorConfig;
use crate::error::ServiceError;
use crate::traits::{CompletionRequest, GenerativeModel};
use crate::types::{CaseStudyBrief, CaseStudyDocument};
use validator::Validate;

/// Per-invocation retry bookkeeping. Discarded on success or terminal
/// failure; never shared across concurrent invocations.
#[derive(Debug, Default)]
struct GenerationAttempt {
    count: u32,
    last_output: Option<String>,
    last_failure: Option<String>,
}

impl GenerationAttempt {
    fn record_failure(&mut self, raw: String, failure: &ServiceError) {
        self.count += 1;
        self.last_output = Some(raw);
        self.last_failure = Some(failure.to_string());
    }
}

/// The case study generation pipeline.
///
/// Stateless apart from its configuration; safe to share behind an
/// `Arc` and invoke concurrently for different briefs.
#[derive(Debug, Clone)]
pub struct CaseStudyGenerator<M> {
    model: M,
    config: GeneratorConfig,
}

impl<M: GenerativeModel> CaseStudyGenerator<M> {
    pub fn new(model: M) -> Self {
        Self {
            model,
            config: GeneratorConfig::default(),
        }
    }

    pub fn with_config(mut self, config: GeneratorConfig) -> Self {
        self.config = config;
        self
    }

    /// The exposed operation: admin-gated case study generation.
    pub async fn generate_case_study(
        &self,
        brief: &CaseStudyBrief,
        caller: &AuthenticatedIdentity,
    ) -> Result<CaseStudyDocument, ServiceError> {
        require_role(caller, Role::Admin)?;
        self.generate(brief, caller).await
    }

    /// Run the pipeline for one brief.
    ///
    /// Terminal failures: `InvalidBrief` (before any model call),
    /// `GenerationFailed` (empty model response, exactly one call,
    /// never retried) and `GenerationExhausted` (retry budget consumed).
    /// A partially valid document is never returned.
    pub async fn generate(
        &self,
        brief: &CaseStudyBrief,
        caller: &AuthenticatedIdentity,
    ) -> Result<CaseStudyDocument, ServiceError> {
        brief
            .validate()
            .map_err(|e| ServiceError::InvalidBrief(e.to_string()))?;

        let request_id = Uuid::new_v4();
        let payload = prompt::user_payload(brief)?;
        let mut attempt = GenerationAttempt::default();

        loop {
            tracing::info!(
                target: "caseforge::generator",
                request_id = %request_id,
                title = %brief.title,
                attempt = attempt.count,
                "generating case study"
            );

            let request = CompletionRequest::structured(
                prompt::SYSTEM_INSTRUCTION,
                payload.clone(),
                caller.subject.clone(),
            );
            // Transport and provider errors propagate as-is: the retry
            // budget covers content-shape failures only.
            let response = self.model.complete(request).await?;

            let Some(raw) = response.filter(|text| !text.is_empty()) else {
                tracing::error!(
                    target: "caseforge::generator",
                    request_id = %request_id,
                    title = %brief.title,
                    "model returned no content"
                );
                return Err(ServiceError::GenerationFailed {
                    brief: brief.clone(),
                });
            };

            tracing::debug!(
                target: "caseforge::generator",
                request_id = %request_id,
                raw = %raw,
                "raw model output"
            );

            match CaseStudyDocument::parse(&raw) {
                Ok(document) => {
                    tracing::info!(
                        target: "caseforge::generator",
                        request_id = %request_id,
                        title = %document.title,
                        attempts = attempt.count + 1,
                        "case study generated"
                    );
                    return Ok(document);
                }
                Err(failure) => {
                    attempt.record_failure(raw, &failure);
                    tracing::warn!(
                        target: "caseforge::generator",
                        request_id = %request_id,
                        attempt = attempt.count,
                        reason = attempt.last_failure.as_deref().unwrap_or_default(),
                        "non-conforming model output"
                    );
                    if attempt.count > self.config.max_retries {
                        tracing::error!(
                            target: "caseforge::generator",
                            request_id = %request_id,
                            title = %brief.title,
                            attempts = attempt.count,
                            last_output = attempt.last_output.as_deref().unwrap_or_default(),
                            "retry budget exhausted"
                        );
                        return Err(ServiceError::GenerationExhausted {
                            brief: brief.clone(),
                        });
                    }
                }
            }
        }
    }
}
