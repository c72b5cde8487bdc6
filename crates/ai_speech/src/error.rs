//! Speech synthesis errors
//!
//! Each variant names a distinct reason audio could not be produced. Callers
//! that only need a yes/no answer collapse them into a single fallback.

use thiserror::Error;

/// Errors that can occur during speech synthesis
#[derive(Debug, Error)]
pub enum SpeechError {
    /// No API key configured for the provider
    #[error("Speech provider not configured")]
    NotConfigured,

    /// Failed to connect to speech service
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to speech service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Speech service answered with a non-success status
    #[error("HTTP {status} from speech service")]
    HttpStatus {
        /// HTTP status code
        status: u16,
    },

    /// Response body could not be interpreted
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Follow-up download of the audio URL failed
    #[error("Audio download failed: {0}")]
    AudioFetchFailed(String),

    /// Inline audio could not be decoded
    #[error("Audio decode failed: {0}")]
    DecodeFailed(String),

    /// Response held neither an audio URL nor inline audio
    #[error("No audio in response")]
    NoAudio,

    /// Timeout during processing
    #[error("Speech request timed out")]
    Timeout,

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl From<reqwest::Error> for SpeechError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_connect() {
            Self::ConnectionFailed(err.to_string())
        } else {
            Self::RequestFailed(err.to_string())
        }
    }
}
