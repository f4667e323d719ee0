//! caseforge
//!
//! Case-study generation and streaming voice transcription core for a
//! backend service. Two independent components over abstract model
//! clients:
//!
//! - [`CaseStudyGenerator`]: turns a structured [`CaseStudyBrief`] into
//!   a validated [`CaseStudyDocument`] via a generative model, with a
//!   bounded blind-retry loop around output validation.
//! - [`TranscriptionRelay`]: relays audio chunks from a live connection
//!   to a speech-to-text model and emits transcripts on the same
//!   connection, containing per-chunk failures.
//!
//! Transport setup, route registration, and authentication decisions
//! are host concerns; the core consumes an [`AuthenticatedIdentity`]
//! and the model traits in [`traits`].
//!
//! # Example
//! ```rust,no_run
//! use caseforge::{
//!     AuthenticatedIdentity, CaseStudyBrief, CaseStudyGenerator, OpenAiClient, OpenAiConfig,
//!     Role,
//! };
//!
//! # async fn example() -> Result<(), caseforge::ServiceError> {
//! let client = OpenAiClient::new(OpenAiConfig::from_env()?)?;
//! let generator = CaseStudyGenerator::new(client);
//!
//! let brief = CaseStudyBrief::new("Relaunch", "Acme GmbH", "Retail", "Project notes...")
//!     .with_service("SEO")
//!     .with_result("impressions", 1_000_000.0);
//! let caller = AuthenticatedIdentity::new("user-123").with_role(Role::Admin);
//!
//! let document = generator.generate_case_study(&brief, &caller).await?;
//! println!("{}", document.content);
//! # Ok(())
//! # }
//! ```
#![deny(unsafe_code)]

pub mod auth;
pub mod config;
pub mod defaults;
pub mod error;
pub mod generator;
pub mod openai;
pub mod relay;
pub mod traits;
pub mod types;

pub use auth::{AuthenticatedIdentity, Role, require_role};
pub use config::{DeliveryOrder, GeneratorConfig, RelayConfig};
pub use error::{Result, ServiceError};
pub use generator::CaseStudyGenerator;
pub use openai::{OpenAiClient, OpenAiConfig};
pub use relay::TranscriptionRelay;
pub use traits::{CompletionRequest, GenerativeModel, TranscriptionModel, TranscriptionRequest};
pub use types::{AudioChunk, AudioFormat, CaseStudyBrief, CaseStudyDocument};
