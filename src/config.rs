//! Component configuration.

use serde::{Deserialize, Serialize};

use crate::defaults;

/// Configuration for the document generation pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Re-rolls permitted after the first attempt. The pipeline makes at
    /// most `1 + max_retries` model calls per invocation.
    pub max_retries: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_retries: defaults::MAX_RETRIES,
        }
    }
}

impl GeneratorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }
}

/// Whether transcripts must leave the relay in chunk-arrival order.
///
/// The underlying model calls are independent, so out-of-order
/// completion is possible; ordering is only guaranteed when the relay
/// serializes per-connection processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryOrder {
    /// Process chunks sequentially; transcripts match arrival order.
    #[default]
    Arrival,
    /// Dispatch chunks concurrently; transcripts follow completion.
    Completion,
}

/// Configuration for the transcription relay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayConfig {
    /// Target language hint forwarded with every chunk.
    pub language_hint: String,
    pub delivery_order: DeliveryOrder,
    /// Concurrent chunk bound, only relevant for `Completion` order.
    pub max_in_flight: usize,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            language_hint: defaults::LANGUAGE_HINT.to_string(),
            delivery_order: DeliveryOrder::default(),
            max_in_flight: defaults::RELAY_MAX_IN_FLIGHT,
        }
    }
}

impl RelayConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_language_hint(mut self, hint: impl Into<String>) -> Self {
        self.language_hint = hint.into();
        self
    }

    pub const fn with_delivery_order(mut self, order: DeliveryOrder) -> Self {
        self.delivery_order = order;
        self
    }

    pub const fn with_max_in_flight(mut self, bound: usize) -> Self {
        self.max_in_flight = bound;
        self
    }
}
