//! Default values shared across the crate.

/// Retries after the first attempt; 4 model calls in total.
pub const MAX_RETRIES: u32 = 3;

/// Target language hint handed to the transcription model.
pub const LANGUAGE_HINT: &str = "de";

/// Chat model used for document generation.
pub const CHAT_MODEL: &str = "gpt-4-turbo";

/// Speech-to-text model used by the relay.
pub const STT_MODEL: &str = "whisper-1";

/// Base URL of the OpenAI-compatible API.
pub const BASE_URL: &str = "https://api.openai.com/v1";

/// Outbound request timeout in seconds.
pub const REQUEST_TIMEOUT_SECS: u64 = 120;

/// In-flight chunk bound for completion-ordered relays.
pub const RELAY_MAX_IN_FLIGHT: usize = 4;
