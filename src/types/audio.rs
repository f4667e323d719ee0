//! Audio types for the transcription relay.

use serde::{Deserialize, Serialize};

/// Media type of an inbound audio payload.
///
/// The relay accepts one WAV file per message; the variant exists so the
/// media type travels with the bytes instead of being assumed downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioFormat {
    Wav,
}

impl AudioFormat {
    pub const fn mime_type(self) -> &'static str {
        match self {
            Self::Wav => "audio/wav",
        }
    }

    pub const fn extension(self) -> &'static str {
        match self {
            Self::Wav => "wav",
        }
    }

    /// Default file name used when the payload is sent as a form part.
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Wav => "audio.wav",
        }
    }
}

/// One transcription unit: an opaque byte payload tagged with its media
/// type. Chunks carry no state from previous chunks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioChunk {
    pub data: Vec<u8>,
    pub format: AudioFormat,
}

impl AudioChunk {
    /// Wrap raw bytes framed as one WAV file.
    pub fn wav(data: Vec<u8>) -> Self {
        Self {
            data,
            format: AudioFormat::Wav,
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
