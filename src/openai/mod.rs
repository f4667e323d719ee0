//! OpenAI-compatible model client.
//!
//! One HTTP client implementing both model traits: chat completions in
//! JSON mode for document generation, and Whisper transcriptions for
//! the relay.

mod client;
mod config;

pub use client::OpenAiClient;
pub use config::OpenAiConfig;
