//! Configuration for the text generation client

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Configuration for the generation provider
#[derive(Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Default API key, used when a caller does not supply one
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// Base URL of the Generative Language API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Model identifier
    #[serde(default = "default_model")]
    pub model: String,

    /// Request timeout in milliseconds (client default when unset)
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

impl std::fmt::Debug for GenerationConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenerationConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_model() -> String {
    "gemini-2.0-flash-exp".to_string()
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            model: default_model(),
            timeout_ms: None,
        }
    }
}

impl GenerationConfig {
    /// Validate the configuration
    ///
    /// The API key is optional here; callers may supply one per request.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.trim().is_empty() {
            return Err("Generation base URL must not be empty".to_string());
        }

        if self.model.trim().is_empty() {
            return Err("Generation model must not be empty".to_string());
        }

        if self.timeout_ms == Some(0) {
            return Err("Timeout must be greater than 0".to_string());
        }

        Ok(())
    }
}
