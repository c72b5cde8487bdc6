//! Application configuration
//!
//! Layered from built-in defaults, an optional `config.toml`, `PARAPHRASER_*`
//! environment variables and finally the well-known provider key variables.

use ai_core::GenerationConfig;
use ai_speech::SpeechConfig;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::telemetry::LoggingConfig;

/// Prefix for structured environment overrides
pub const ENV_PREFIX: &str = "PARAPHRASER";

/// Environment variable holding the default generation key
pub const GENERATION_KEY_VAR: &str = "GEMINI_API_KEY";

/// Environment variable holding the speech key
pub const SPEECH_KEY_VAR: &str = "ASSEMBLYAI_API_KEY";

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Text generation provider
    #[serde(default)]
    pub generation: GenerationConfig,

    /// Speech synthesis provider
    #[serde(default)]
    pub speech: SpeechConfig,

    /// Logging output
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment and optional file
    ///
    /// A source that fails to load falls back to the defaults and the error
    /// is handed back. The provider key variables apply either way.
    pub fn load_or_default() -> (Self, Option<config::ConfigError>) {
        let loaded = Self::from_sources(
            config::File::with_name("config").required(false),
            Self::environment(),
        );
        Self::with_key_overrides(loaded, |name| std::env::var(name).ok())
    }

    fn with_key_overrides(
        loaded: Result<Self, config::ConfigError>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> (Self, Option<config::ConfigError>) {
        let (mut config, error) = match loaded {
            Ok(config) => (config, None),
            Err(e) => (Self::default(), Some(e)),
        };
        config.apply_key_overrides(lookup);
        (config, error)
    }

    /// Structured overrides, e.g. `PARAPHRASER_SPEECH__MAX_TEXT_CHARS=2000`
    fn environment() -> config::Environment {
        config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    fn from_sources<F>(file: F, env: config::Environment) -> Result<Self, config::ConfigError>
    where
        F: config::Source + Send + Sync + 'static,
    {
        let builder = config::Config::builder()
            // Start with defaults
            .set_default(
                "generation.base_url",
                "https://generativelanguage.googleapis.com/v1beta",
            )?
            .set_default("generation.model", "gemini-2.0-flash-exp")?
            .set_default("speech.base_url", "https://api.assemblyai.com")?
            .set_default("logging.filter", "info")?
            // Load from file if exists
            .add_source(file)
            // Override with environment variables
            .add_source(env);

        let mut config: Self = builder.build()?.try_deserialize()?;
        config.drop_empty_keys();
        Ok(config)
    }

    /// Apply `GEMINI_API_KEY` / `ASSEMBLYAI_API_KEY` when set and non-empty
    fn apply_key_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(key) = non_empty(lookup(GENERATION_KEY_VAR)) {
            self.generation.api_key = Some(SecretString::from(key));
        }
        if let Some(key) = non_empty(lookup(SPEECH_KEY_VAR)) {
            self.speech.api_key = Some(SecretString::from(key));
        }
    }

    /// An empty key counts as no key
    fn drop_empty_keys(&mut self) {
        for key in [&mut self.generation.api_key, &mut self.speech.api_key] {
            if key.as_ref().is_some_and(|k| k.expose_secret().is_empty()) {
                *key = None;
            }
        }
    }

    /// Validate both provider sections
    pub fn validate(&self) -> Result<(), String> {
        self.generation.validate()?;
        self.speech.validate()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
