//! Speech adapter - Implements SpeechSynthesisPort using ai_speech crate

use std::sync::Arc;

use ai_speech::{
    AssemblyAiSpeechProvider, SpeechConfig, SpeechError, SpeechSynthesizer, SynthesizedAudio,
};
use application::{
    error::ApplicationError,
    ports::{SpeechSynthesisPort, UnavailableReason},
};
use async_trait::async_trait;
use bytes::Bytes;
use tracing::{debug, instrument};

/// Adapter for the hosted speech synthesis API
pub struct AssemblyAiSpeechAdapter {
    provider: Arc<dyn SpeechSynthesizer>,
}

impl std::fmt::Debug for AssemblyAiSpeechAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssemblyAiSpeechAdapter")
            .field("configured", &self.provider.is_configured())
            .finish()
    }
}

impl AssemblyAiSpeechAdapter {
    /// Create a new speech adapter
    ///
    /// # Errors
    ///
    /// Returns an error if the provider fails to initialize.
    pub fn new(config: SpeechConfig) -> Result<Self, ApplicationError> {
        let provider = AssemblyAiSpeechProvider::new(config)
            .map_err(|e: SpeechError| ApplicationError::Configuration(e.to_string()))?;

        Ok(Self::from_provider(Arc::new(provider)))
    }

    /// Wrap an existing synthesizer
    pub fn from_provider(provider: Arc<dyn SpeechSynthesizer>) -> Self {
        Self { provider }
    }

    /// Convert ai_speech error to the reason logged by the speech fetcher
    fn map_error(e: SpeechError) -> UnavailableReason {
        match e {
            SpeechError::NotConfigured | SpeechError::Configuration(_) => {
                UnavailableReason::NotConfigured
            },
            SpeechError::HttpStatus { status } => UnavailableReason::HttpStatus(status),
            SpeechError::InvalidResponse(msg) => UnavailableReason::InvalidResponse(msg),
            SpeechError::AudioFetchFailed(msg) => UnavailableReason::AudioFetchFailed(msg),
            SpeechError::DecodeFailed(msg) => UnavailableReason::DecodeFailed(msg),
            SpeechError::NoAudio => UnavailableReason::NoAudio,
            SpeechError::Timeout => UnavailableReason::Transport("timed out".to_string()),
            SpeechError::ConnectionFailed(msg) | SpeechError::RequestFailed(msg) => {
                UnavailableReason::Transport(msg)
            },
        }
    }
}

#[async_trait]
impl SpeechSynthesisPort for AssemblyAiSpeechAdapter {
    #[instrument(skip(self, text), fields(text_len = text.len(), voice = ?voice))]
    async fn synthesize(&self, text: &str, voice: Option<&str>) -> Result<Bytes, UnavailableReason> {
        let audio = self
            .provider
            .synthesize(text, voice)
            .await
            .map_err(Self::map_error)?;

        debug!(source = ?audio.source(), bytes = audio.len(), "Speech adapter received audio");

        Ok(SynthesizedAudio::into_bytes(audio))
    }

    fn is_configured(&self) -> bool {
        self.provider.is_configured()
    }
}
