//! Port definitions for text generation
//!
//! Defines the trait (port) that generation adapters must implement.

use async_trait::async_trait;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use crate::error::GenerationError;

/// A single-prompt generation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Prompt sent to the model as the user turn
    pub prompt: String,
    /// Model to use (overrides config default)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl GenerationRequest {
    /// Create a request for the configured default model
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            model: None,
        }
    }

    /// Set the model for this request
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }
}

/// Generated text and metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResponse {
    /// Generated text, exactly as returned by the provider
    pub text: String,
    /// Model that produced the text
    pub model: String,
    /// Token usage statistics
    pub usage: Option<TokenUsage>,
    /// Finish reason reported by the provider
    pub finish_reason: Option<String>,
}

/// Token usage statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// Port for text generation providers
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate text for `request`, authenticating with `api_key`
    async fn generate(
        &self,
        api_key: &SecretString,
        request: GenerationRequest,
    ) -> Result<GenerationResponse, GenerationError>;

    /// Get the default model
    fn default_model(&self) -> &str;
}
