//! Paraphrase service - Validates input and requests a paraphrase

use std::{fmt, sync::Arc, time::Instant};

use domain::{ParaphraseOptions, ParaphraseRequest};
use secrecy::SecretString;
use tracing::{debug, info, instrument, warn};

use crate::{
    error::{ApplicationError, ParaphraseError, ParaphraseFailure},
    ports::GenerationPort,
};

/// Settings for [`ParaphraseService`]
#[derive(Clone)]
pub struct ParaphraseSettings {
    /// Key used when the caller does not supply one
    pub default_api_key: Option<SecretString>,
    /// Model every request is sent to
    pub model: String,
}

impl fmt::Debug for ParaphraseSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParaphraseSettings")
            .field(
                "default_api_key",
                &self.default_api_key.as_ref().map(|_| "[REDACTED]"),
            )
            .field("model", &self.model)
            .finish()
    }
}

/// Service that turns text into a paraphrase in the chosen style
pub struct ParaphraseService {
    generator: Arc<dyn GenerationPort>,
    settings: ParaphraseSettings,
}

impl fmt::Debug for ParaphraseService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParaphraseService")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl ParaphraseService {
    /// Create a new paraphrase service
    pub fn new(generator: Arc<dyn GenerationPort>, settings: ParaphraseSettings) -> Self {
        Self {
            generator,
            settings,
        }
    }

    /// Whether a default key is configured
    pub fn has_default_key(&self) -> bool {
        self.settings.default_api_key.is_some()
    }

    /// Model requests are sent to
    pub fn model(&self) -> &str {
        &self.settings.model
    }

    /// Explicit non-empty key first, then the configured default
    fn resolve_api_key(&self, api_key: Option<&str>) -> Option<SecretString> {
        api_key
            .filter(|key| !key.is_empty())
            .map(SecretString::from)
            .or_else(|| self.settings.default_api_key.clone())
    }

    /// Request a paraphrase of `text`.
    ///
    /// Does not validate `text`; run it through the validator first or use
    /// [`Self::paraphrase`]. Makes exactly one provider call when a key is
    /// available and none otherwise.
    #[instrument(skip(self, text, api_key), fields(style = %options.style, text_len = text.len()))]
    pub async fn generate_paraphrase(
        &self,
        text: &str,
        options: ParaphraseOptions,
        api_key: Option<&str>,
    ) -> Result<String, ParaphraseFailure> {
        let Some(key) = self.resolve_api_key(api_key) else {
            warn!("No generation API key available");
            return Err(ParaphraseFailure::AuthMissing);
        };

        let prompt = options.compose_prompt(text);
        let start = Instant::now();

        match self
            .generator
            .generate(&key, &self.settings.model, &prompt)
            .await
        {
            Ok(paraphrased) => {
                debug!(
                    latency_ms = start.elapsed().as_millis() as u64,
                    output_len = paraphrased.len(),
                    "Paraphrase generated"
                );
                Ok(paraphrased)
            },
            Err(err) => {
                let failure = classify(&err);
                warn!(error = %err, ?failure, "Paraphrase request failed");
                Err(failure)
            },
        }
    }

    /// Run an already-validated request through the provider
    pub async fn paraphrase(&self, request: &ParaphraseRequest) -> Result<String, ParaphraseFailure> {
        self.generate_paraphrase(request.text(), request.options(), request.api_key())
            .await
    }

    /// Validate raw input, then request the paraphrase.
    ///
    /// Invalid input is rejected without contacting the provider.
    pub async fn paraphrase_text(
        &self,
        text: &str,
        options: ParaphraseOptions,
        api_key: Option<&str>,
    ) -> Result<String, ParaphraseError> {
        let mut request = ParaphraseRequest::new(text, options)?;
        if let Some(key) = api_key {
            request = request.with_api_key(key);
        }
        info!(words = %request.word_count(), style = %options.style, "Paraphrasing");

        Ok(self.paraphrase(&request).await?)
    }
}

fn classify(err: &ApplicationError) -> ParaphraseFailure {
    match err {
        ApplicationError::Provider(message) => ParaphraseFailure::from_provider_message(message),
        other => ParaphraseFailure::from_provider_message(&other.to_string()),
    }
}
