//! Generation adapter - Implements GenerationPort using ai_core

use std::sync::Arc;

use ai_core::{
    GeminiTextGenerator, GenerationConfig, GenerationError, GenerationRequest, TextGenerator,
};
use application::{error::ApplicationError, ports::GenerationPort};
use async_trait::async_trait;
use secrecy::SecretString;
use tracing::{debug, instrument};

/// Adapter for the hosted text generation API
pub struct GeminiGenerationAdapter {
    generator: Arc<dyn TextGenerator>,
}

impl std::fmt::Debug for GeminiGenerationAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiGenerationAdapter")
            .field("default_model", &self.generator.default_model())
            .finish()
    }
}

impl GeminiGenerationAdapter {
    /// Create a new adapter with the given configuration
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Configuration` if the client cannot be built.
    pub fn new(config: GenerationConfig) -> Result<Self, ApplicationError> {
        let generator = GeminiTextGenerator::new(config)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;

        Ok(Self::from_generator(Arc::new(generator)))
    }

    /// Wrap an existing generator
    pub fn from_generator(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Convert ai_core error to application error
    ///
    /// The provider's own message is kept so the paraphrase service can
    /// recognize quota and rate limit conditions.
    fn map_error(e: GenerationError) -> ApplicationError {
        match e {
            GenerationError::Configuration(msg) => ApplicationError::Configuration(msg),
            other => ApplicationError::Provider(other.message()),
        }
    }
}

#[async_trait]
impl GenerationPort for GeminiGenerationAdapter {
    #[instrument(skip(self, api_key, prompt), fields(prompt_len = prompt.len()))]
    async fn generate(
        &self,
        api_key: &SecretString,
        model: &str,
        prompt: &str,
    ) -> Result<String, ApplicationError> {
        let request = GenerationRequest::new(prompt).with_model(model);

        let response = self
            .generator
            .generate(api_key, request)
            .await
            .map_err(Self::map_error)?;

        debug!(
            model = %response.model,
            tokens = ?response.usage.as_ref().map(|u| u.total_tokens),
            "Generation adapter received response"
        );

        Ok(response.text)
    }
}
