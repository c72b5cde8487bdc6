//! Speech port - Interface for text-to-speech synthesis

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

/// Why speech audio could not be produced.
///
/// Logged for operators; callers only ever see [`TtsResult::Unavailable`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnavailableReason {
    /// No speech API key configured
    #[error("speech provider is not configured")]
    NotConfigured,

    /// Nothing left to speak after trimming
    #[error("text is empty")]
    EmptyText,

    /// Synthesis call returned a non-success status
    #[error("synthesis returned HTTP {0}")]
    HttpStatus(u16),

    /// Synthesis response could not be interpreted
    #[error("invalid synthesis response: {0}")]
    InvalidResponse(String),

    /// Download of the referenced audio failed or was empty
    #[error("audio download failed: {0}")]
    AudioFetchFailed(String),

    /// Inline audio was not valid base64
    #[error("inline audio could not be decoded: {0}")]
    DecodeFailed(String),

    /// Response carried neither an audio URL nor inline audio
    #[error("response contained no audio")]
    NoAudio,

    /// Network failure or timeout
    #[error("transport failure: {0}")]
    Transport(String),
}

/// Outcome of a speech request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TtsResult {
    /// Audio bytes, always non-empty
    Success {
        /// Encoded audio as returned by the provider
        audio: Bytes,
    },
    /// Speech is not available for this input
    Unavailable,
}

impl TtsResult {
    /// Whether audio was produced
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Audio bytes, if any
    pub fn audio(&self) -> Option<&Bytes> {
        match self {
            Self::Success { audio } => Some(audio),
            Self::Unavailable => None,
        }
    }

    /// Consume into the audio bytes, if any
    pub fn into_audio(self) -> Option<Bytes> {
        match self {
            Self::Success { audio } => Some(audio),
            Self::Unavailable => None,
        }
    }
}

/// Port for text-to-speech synthesis
#[async_trait]
pub trait SpeechSynthesisPort: Send + Sync {
    /// Synthesize already-normalized text with an optional voice.
    ///
    /// Must return non-empty audio on success.
    async fn synthesize(&self, text: &str, voice: Option<&str>) -> Result<Bytes, UnavailableReason>;

    /// Whether a speech API key is configured
    fn is_configured(&self) -> bool;
}
