//! AssemblyAI Speech Provider
//!
//! Implements `SpeechSynthesizer` against the `/v2/tts` endpoint.
//!
//! The synthesis response is checked for, in order:
//! - `audio_url` / `audioUrl`: downloaded with a follow-up GET
//! - `audio_content`: base64-encoded audio decoded in place

use std::time::Duration;

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use tracing::{debug, instrument, warn};

use crate::config::SpeechConfig;
use crate::error::SpeechError;
use crate::ports::SpeechSynthesizer;
use crate::types::{AudioSource, SynthesizedAudio};

/// AssemblyAI speech provider
#[derive(Clone)]
pub struct AssemblyAiSpeechProvider {
    client: Client,
    config: SpeechConfig,
}

impl std::fmt::Debug for AssemblyAiSpeechProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssemblyAiSpeechProvider")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl AssemblyAiSpeechProvider {
    /// Create a new AssemblyAI speech provider
    ///
    /// # Errors
    ///
    /// Returns `SpeechError::Configuration` if the configuration is invalid.
    pub fn new(config: SpeechConfig) -> Result<Self, SpeechError> {
        config.validate().map_err(SpeechError::Configuration)?;

        let client = Client::builder().build().map_err(|e| {
            SpeechError::Configuration(format!("Failed to create HTTP client: {e}"))
        })?;

        Ok(Self { client, config })
    }

    /// Get the API key
    fn api_key(&self) -> Result<&SecretString, SpeechError> {
        self.config.api_key.as_ref().ok_or(SpeechError::NotConfigured)
    }

    /// Build the TTS endpoint URL
    fn tts_url(&self) -> String {
        format!("{}/v2/tts", self.config.base_url.trim_end_matches('/'))
    }

    /// Download audio from a URL returned by the synthesis call
    #[instrument(skip(self, url))]
    async fn fetch_audio_url(&self, url: &str) -> Result<SynthesizedAudio, SpeechError> {
        let response = self
            .client
            .get(url)
            .timeout(Duration::from_millis(self.config.audio_fetch_timeout_ms))
            .send()
            .await
            .map_err(|e| SpeechError::AudioFetchFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SpeechError::AudioFetchFailed(format!("HTTP {status}")));
        }

        let data = response
            .bytes()
            .await
            .map_err(|e| SpeechError::AudioFetchFailed(e.to_string()))?;

        if data.is_empty() {
            return Err(SpeechError::AudioFetchFailed("empty body".to_string()));
        }

        debug!(audio_size = data.len(), "Downloaded synthesized audio");
        Ok(SynthesizedAudio::new(data, AudioSource::Url))
    }
}

/// TTS request body
#[derive(Debug, Serialize)]
struct TtsRequest<'a> {
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    voice: Option<&'a str>,
}

/// Where the audio lives in a synthesis response
#[derive(Debug, PartialEq, Eq)]
enum AudioLocation {
    Url(String),
    Inline(serde_json::Value),
    Missing,
}

/// Pick the audio location out of a synthesis response body
fn locate_audio(body: &serde_json::Value) -> AudioLocation {
    let url = ["audio_url", "audioUrl"].iter().find_map(|field| {
        body.get(*field)
            .and_then(serde_json::Value::as_str)
            .filter(|u| !u.is_empty())
    });

    if let Some(url) = url {
        return AudioLocation::Url(url.to_string());
    }

    match body.get("audio_content") {
        Some(content) => AudioLocation::Inline(content.clone()),
        None => AudioLocation::Missing,
    }
}

/// Decode inline base64 audio
fn decode_inline(content: &serde_json::Value) -> Result<SynthesizedAudio, SpeechError> {
    let encoded = content
        .as_str()
        .ok_or_else(|| SpeechError::DecodeFailed("audio_content is not a string".to_string()))?;

    // Line-wrapped payloads are accepted
    let compact: String = encoded
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    let data = STANDARD
        .decode(compact)
        .map_err(|e| SpeechError::DecodeFailed(e.to_string()))?;

    if data.is_empty() {
        return Err(SpeechError::NoAudio);
    }

    Ok(SynthesizedAudio::new(data, AudioSource::Inline))
}

#[async_trait]
impl SpeechSynthesizer for AssemblyAiSpeechProvider {
    #[instrument(skip(self, text), fields(text_len = text.len(), voice = ?voice))]
    async fn synthesize(
        &self,
        text: &str,
        voice: Option<&str>,
    ) -> Result<SynthesizedAudio, SpeechError> {
        let api_key = self.api_key()?;

        let request = TtsRequest {
            text,
            voice: voice.filter(|v| !v.is_empty()),
        };

        debug!("Requesting speech synthesis");

        let response = self
            .client
            .post(self.tts_url())
            .header("Authorization", api_key.expose_secret())
            .timeout(Duration::from_millis(self.config.synthesis_timeout_ms))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = %status, "Speech synthesis request failed");
            return Err(SpeechError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| SpeechError::InvalidResponse(format!("Failed to parse response: {e}")))?;

        match locate_audio(&body) {
            AudioLocation::Url(url) => self.fetch_audio_url(&url).await,
            AudioLocation::Inline(content) => decode_inline(&content),
            AudioLocation::Missing => Err(SpeechError::NoAudio),
        }
    }

    fn is_configured(&self) -> bool {
        self.config.is_configured()
    }
}
