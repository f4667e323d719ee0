//! Core data model: briefs, documents, and audio chunks.

mod audio;
mod brief;
mod document;

pub use audio::{AudioChunk, AudioFormat};
pub use brief::CaseStudyBrief;
pub use document::CaseStudyDocument;
