//! Case study document: the validated output of the generation pipeline.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::ServiceError;

/// A generated case study.
///
/// Invariant: all three fields are present and non-empty. A document that
/// fails this never leaves [`CaseStudyDocument::parse`] — absence or a
/// wrong type is a validation failure, not a best-effort default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CaseStudyDocument {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub description: String,
    /// Markdown body (challenges, solution, results, technologies, quote).
    #[validate(length(min = 1))]
    pub content: String,
}

impl CaseStudyDocument {
    /// Parse raw model output into a validated document.
    ///
    /// Malformed JSON and schema violations route to the same error:
    /// both mean the attempt produced a non-conforming document.
    pub fn parse(raw: &str) -> Result<Self, ServiceError> {
        let invalid = || ServiceError::InvalidDocumentFormat {
            raw: raw.to_string(),
        };
        let document: Self = serde_json::from_str(raw).map_err(|_| invalid())?;
        document.validate().map_err(|_| invalid())?;
        Ok(document)
    }
}
