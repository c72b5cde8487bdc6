//! Service wiring
//!
//! Builds the application services from configuration.

use std::sync::Arc;

use application::{
    ApplicationError, ParaphraseService, ParaphraseSettings, SpeechFetcher,
    ports::{AudioCachePort, GenerationPort, SpeechSynthesisPort},
};
use tracing::info;

use crate::{
    adapters::{AssemblyAiSpeechAdapter, GeminiGenerationAdapter},
    cache::MokaAudioCache,
    config::AppConfig,
};

/// Ready-to-use application services
#[derive(Debug, Clone)]
pub struct AppServices {
    /// Validation and paraphrase generation
    pub paraphrase: Arc<ParaphraseService>,
    /// Cached speech synthesis
    pub speech: Arc<SpeechFetcher>,
}

impl AppServices {
    /// Build all adapters and services
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Configuration` if a provider section is
    /// invalid.
    pub fn from_config(config: &AppConfig) -> Result<Self, ApplicationError> {
        config.validate().map_err(ApplicationError::Configuration)?;

        let generator: Arc<dyn GenerationPort> =
            Arc::new(GeminiGenerationAdapter::new(config.generation.clone())?);
        let synthesizer: Arc<dyn SpeechSynthesisPort> =
            Arc::new(AssemblyAiSpeechAdapter::new(config.speech.clone())?);
        let cache: Arc<dyn AudioCachePort> = Arc::new(MokaAudioCache::new());

        let paraphrase = ParaphraseService::new(
            generator,
            ParaphraseSettings {
                default_api_key: config.generation.api_key.clone(),
                model: config.generation.model.clone(),
            },
        );
        let speech =
            SpeechFetcher::with_max_chars(synthesizer, cache, config.speech.max_text_chars);

        info!(
            model = %config.generation.model,
            generation_key = paraphrase.has_default_key(),
            speech_configured = config.speech.is_configured(),
            "Services initialized"
        );

        Ok(Self {
            paraphrase: Arc::new(paraphrase),
            speech: Arc::new(speech),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_from_defaults() {
        let services = AppServices::from_config(&AppConfig::default()).unwrap();
        assert_eq!(services.paraphrase.model(), "gemini-2.0-flash-exp");
        assert!(!services.paraphrase.has_default_key());
    }

    #[test]
    fn invalid_config_is_rejected() {
        let mut config = AppConfig::default();
        config.generation.model = String::new();
        assert!(matches!(
            AppServices::from_config(&config),
            Err(ApplicationError::Configuration(_))
        ));
    }
}
