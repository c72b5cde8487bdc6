//! Types for speech synthesis

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// Where the provider delivered the audio from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioSource {
    /// Downloaded from a URL returned by the synthesis call
    Url,
    /// Decoded from base64 content in the synthesis response
    Inline,
}

/// Audio produced by a synthesis call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesizedAudio {
    data: Bytes,
    source: AudioSource,
}

impl SynthesizedAudio {
    /// Wrap raw audio bytes
    pub fn new(data: impl Into<Bytes>, source: AudioSource) -> Self {
        Self {
            data: data.into(),
            source,
        }
    }

    /// The audio bytes
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consume and return the audio bytes
    #[must_use]
    pub fn into_bytes(self) -> Bytes {
        self.data
    }

    /// How the audio was obtained
    #[must_use]
    pub const fn source(&self) -> AudioSource {
        self.source
    }

    /// Size in bytes
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether no audio bytes are held
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
