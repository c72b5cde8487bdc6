//! Configuration for speech synthesis

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Configuration for the speech synthesis provider
#[derive(Clone, Serialize, Deserialize)]
pub struct SpeechConfig {
    /// Provider API key; synthesis is unavailable without it
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// Provider base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Timeout for the synthesis request in milliseconds
    #[serde(default = "default_synthesis_timeout_ms")]
    pub synthesis_timeout_ms: u64,

    /// Timeout for downloading a returned audio URL in milliseconds
    #[serde(default = "default_audio_fetch_timeout_ms")]
    pub audio_fetch_timeout_ms: u64,

    /// Maximum characters of text sent for synthesis
    #[serde(default = "default_max_text_chars")]
    pub max_text_chars: usize,
}

impl std::fmt::Debug for SpeechConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpeechConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("synthesis_timeout_ms", &self.synthesis_timeout_ms)
            .field("audio_fetch_timeout_ms", &self.audio_fetch_timeout_ms)
            .field("max_text_chars", &self.max_text_chars)
            .finish()
    }
}

fn default_base_url() -> String {
    "https://api.assemblyai.com".to_string()
}

const fn default_synthesis_timeout_ms() -> u64 {
    30_000 // 30 seconds
}

const fn default_audio_fetch_timeout_ms() -> u64 {
    60_000 // 60 seconds
}

const fn default_max_text_chars() -> usize {
    5000
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            synthesis_timeout_ms: default_synthesis_timeout_ms(),
            audio_fetch_timeout_ms: default_audio_fetch_timeout_ms(),
            max_text_chars: default_max_text_chars(),
        }
    }
}

impl SpeechConfig {
    /// Create a minimal config for testing
    #[cfg(test)]
    pub fn test() -> Self {
        Self {
            api_key: Some(SecretString::from("test-key")),
            ..Default::default()
        }
    }

    /// Whether an API key is present
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Validate the configuration
    ///
    /// A missing API key is not an error: the provider then reports
    /// itself as unconfigured.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.trim().is_empty() {
            return Err("Speech base URL must not be empty".to_string());
        }

        if self.synthesis_timeout_ms == 0 || self.audio_fetch_timeout_ms == 0 {
            return Err("Timeouts must be greater than 0".to_string());
        }

        if self.max_text_chars == 0 {
            return Err("Max text length must be greater than 0".to_string());
        }

        Ok(())
    }
}
