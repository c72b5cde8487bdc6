//! Port definitions for speech synthesis
//!
//! Defines the trait (port) that speech synthesis adapters must implement.

use async_trait::async_trait;

use crate::error::SpeechError;
use crate::types::SynthesizedAudio;

/// Port for Text-to-Speech (TTS) implementations
///
/// # Example
///
/// ```ignore
/// use ai_speech::SpeechSynthesizer;
///
/// async fn speak(tts: &impl SpeechSynthesizer, text: &str) -> Option<Vec<u8>> {
///     tts.synthesize(text, None).await.ok().map(|a| a.data().to_vec())
/// }
/// ```
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Convert text to speech
    ///
    /// # Arguments
    ///
    /// * `text` - Text to synthesize, sent as given
    /// * `voice` - Optional voice ID (provider default if None)
    ///
    /// # Errors
    ///
    /// Returns `SpeechError` naming why no audio was produced.
    async fn synthesize(
        &self,
        text: &str,
        voice: Option<&str>,
    ) -> Result<SynthesizedAudio, SpeechError>;

    /// Whether a credential is available for the provider
    fn is_configured(&self) -> bool;
}
