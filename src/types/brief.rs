//! Case study brief: the structured input describing a client engagement.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Structured content brief for one case study.
///
/// Immutable once received; the pipeline borrows it for the duration of a
/// single request. `results` maps metric names to numeric values; the map
/// keeps keys unique and the serialized payload deterministic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct CaseStudyBrief {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "client is required"))]
    pub client: String,
    #[validate(length(min = 1, message = "industry is required"))]
    pub industry: String,
    /// Ordered list of services rendered during the engagement.
    #[serde(default)]
    pub services: Vec<String>,
    /// Free-form source material the case study is written from.
    #[validate(length(min = 1, message = "input is required"))]
    pub input: String,
    /// Metric name to achieved value, e.g. `"impressions" -> 1_000_000`.
    #[serde(default)]
    pub results: BTreeMap<String, f64>,
}

impl CaseStudyBrief {
    pub fn new(
        title: impl Into<String>,
        client: impl Into<String>,
        industry: impl Into<String>,
        input: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            client: client.into(),
            industry: industry.into(),
            services: Vec::new(),
            input: input.into(),
            results: BTreeMap::new(),
        }
    }

    /// Append a rendered service.
    pub fn with_service(mut self, service: impl Into<String>) -> Self {
        self.services.push(service.into());
        self
    }

    /// Replace the full service list.
    pub fn with_services(mut self, services: Vec<String>) -> Self {
        self.services = services;
        self
    }

    /// Record an achieved metric.
    pub fn with_result(mut self, metric: impl Into<String>, value: f64) -> Self {
        self.results.insert(metric.into(), value);
        self
    }
}
