//! Gemini `generateContent` client implementation

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::config::GenerationConfig;
use crate::error::GenerationError;
use crate::ports::{GenerationRequest, GenerationResponse, TextGenerator, TokenUsage};

/// Text generator backed by the Generative Language API
pub struct GeminiTextGenerator {
    client: Client,
    config: GenerationConfig,
}

impl std::fmt::Debug for GeminiTextGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiTextGenerator")
            .field("base_url", &self.config.base_url)
            .field("model", &self.config.model)
            .finish_non_exhaustive()
    }
}

impl GeminiTextGenerator {
    /// Create a new Gemini text generator
    ///
    /// # Errors
    ///
    /// Returns `GenerationError::Configuration` if the configuration is
    /// invalid or the HTTP client cannot be built.
    pub fn new(config: GenerationConfig) -> Result<Self, GenerationError> {
        config.validate().map_err(GenerationError::Configuration)?;

        let mut builder = Client::builder();
        if let Some(timeout_ms) = config.timeout_ms {
            builder = builder.timeout(Duration::from_millis(timeout_ms));
        }
        let client = builder.build().map_err(|e| {
            GenerationError::Configuration(format!("Failed to create HTTP client: {e}"))
        })?;

        info!(
            base_url = %config.base_url,
            model = %config.model,
            "Initialized Gemini text generator"
        );

        Ok(Self { client, config })
    }

    /// Build the `generateContent` URL for a model
    fn generate_url(&self, model: &str) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            model
        )
    }

    /// Get the model to use for a request
    fn resolve_model<'a>(&'a self, request: &'a GenerationRequest) -> &'a str {
        request.model.as_deref().unwrap_or(&self.config.model)
    }
}

/// Gemini request body
#[derive(Debug, Serialize)]
struct GeminiRequest<'a> {
    contents: Vec<GeminiContent<'a>>,
}

#[derive(Debug, Serialize)]
struct GeminiContent<'a> {
    role: &'a str,
    parts: Vec<GeminiPart<'a>>,
}

#[derive(Debug, Serialize)]
struct GeminiPart<'a> {
    text: &'a str,
}

/// Gemini response body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
    #[serde(default)]
    usage_metadata: Option<GeminiUsage>,
    #[serde(default)]
    model_version: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiCandidate {
    #[serde(default)]
    content: Option<GeminiCandidateContent>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidateContent {
    #[serde(default)]
    parts: Vec<GeminiResponsePart>,
}

#[derive(Debug, Deserialize)]
struct GeminiResponsePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiUsage {
    #[serde(default)]
    prompt_token_count: u32,
    #[serde(default)]
    candidates_token_count: u32,
    #[serde(default)]
    total_token_count: u32,
}

/// Gemini API error response
#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
    #[serde(default)]
    status: Option<String>,
}

impl GeminiResponse {
    /// Joined text of the first candidate, if it has any
    fn first_candidate_text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect();
        (!text.is_empty()).then_some(text)
    }
}

#[async_trait]
impl TextGenerator for GeminiTextGenerator {
    #[instrument(skip(self, api_key, request), fields(model = %self.resolve_model(&request), prompt_len = request.prompt.len()))]
    async fn generate(
        &self,
        api_key: &SecretString,
        request: GenerationRequest,
    ) -> Result<GenerationResponse, GenerationError> {
        let model = self.resolve_model(&request).to_string();

        let body = GeminiRequest {
            contents: vec![GeminiContent {
                role: "user",
                parts: vec![GeminiPart {
                    text: &request.prompt,
                }],
            }],
        };

        debug!("Sending generateContent request");

        let response = self
            .client
            .post(self.generate_url(&model))
            .header("x-goog-api-key", api_key.expose_secret())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            warn!(status = %status, "Generation request failed");

            if let Ok(api_error) = serde_json::from_str::<ApiError>(&error_body) {
                debug!(code = ?api_error.error.status, "Provider returned error body");
                return Err(GenerationError::Api {
                    status: status.as_u16(),
                    message: api_error.error.message,
                });
            }

            if status.as_u16() == 429 {
                return Err(GenerationError::RateLimited);
            }

            return Err(GenerationError::Api {
                status: status.as_u16(),
                message: format!("HTTP {status}: {error_body}"),
            });
        }

        let gemini_response: GeminiResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::InvalidResponse(format!("Failed to parse response: {e}")))?;

        let text = gemini_response
            .first_candidate_text()
            .ok_or(GenerationError::EmptyResponse)?;

        let usage = gemini_response.usage_metadata.as_ref().map(|u| TokenUsage {
            prompt_tokens: u.prompt_token_count,
            completion_tokens: u.candidates_token_count,
            total_tokens: u.total_token_count,
        });

        debug!(text_len = text.len(), tokens = ?usage, "Generation completed");

        Ok(GenerationResponse {
            text,
            model: gemini_response.model_version.unwrap_or(model),
            usage,
            finish_reason: gemini_response
                .candidates
                .first()
                .and_then(|c| c.finish_reason.clone()),
        })
    }

    fn default_model(&self) -> &str {
        &self.config.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_generate_url() {
        let generator = GeminiTextGenerator::new(GenerationConfig::default()).unwrap();
        assert_eq!(
            generator.generate_url("gemini-2.0-flash-exp"),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash-exp:generateContent"
        );
    }

    #[test]
    fn trailing_slash_in_base_url_is_ignored() {
        let config = GenerationConfig {
            base_url: "http://localhost:9000/".to_string(),
            ..Default::default()
        };
        let generator = GeminiTextGenerator::new(config).unwrap();
        assert_eq!(
            generator.generate_url("m"),
            "http://localhost:9000/models/m:generateContent"
        );
    }

    #[test]
    fn request_model_overrides_default() {
        let generator = GeminiTextGenerator::new(GenerationConfig::default()).unwrap();
        let request = GenerationRequest::new("hi").with_model("other");
        assert_eq!(generator.resolve_model(&request), "other");
        let request = GenerationRequest::new("hi");
        assert_eq!(generator.resolve_model(&request), "gemini-2.0-flash-exp");
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = GenerationConfig {
            model: String::new(),
            ..Default::default()
        };
        assert!(matches!(
            GeminiTextGenerator::new(config),
            Err(GenerationError::Configuration(_))
        ));
    }

    #[test]
    fn first_candidate_parts_are_joined() {
        let response: GeminiResponse = serde_json::from_value(serde_json::json!({
            "candidates": [{
                "content": {"parts": [{"text": "Hello, "}, {"text": "world"}]},
                "finishReason": "STOP"
            }]
        }))
        .unwrap();
        assert_eq!(response.first_candidate_text(), Some("Hello, world".to_string()));
    }

    #[test]
    fn missing_candidates_yield_none() {
        let response: GeminiResponse = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(response.first_candidate_text(), None);
    }
}
