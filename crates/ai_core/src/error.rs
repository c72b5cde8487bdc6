//! Text generation errors

use thiserror::Error;

/// Errors that can occur while calling the generation provider
#[derive(Debug, Error)]
pub enum GenerationError {
    /// Failed to connect to the provider
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the provider failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Provider rejected the request with an error body
    #[error("Provider error ({status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Message reported by the provider
        message: String,
    },

    /// Provider response could not be parsed
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Provider returned no generated text
    #[error("Empty response from model")]
    EmptyResponse,

    /// Timeout during generation
    #[error("Generation timeout")]
    Timeout,

    /// Rate limit or quota exceeded
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Invalid client configuration
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl GenerationError {
    /// The human-readable message behind this error
    ///
    /// For provider-reported errors this is the provider's own message,
    /// without the status prefix.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Api { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

impl From<reqwest::Error> for GenerationError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_connect() {
            Self::ConnectionFailed(err.to_string())
        } else {
            Self::RequestFailed(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_message_is_provider_text() {
        let err = GenerationError::Api {
            status: 503,
            message: "model overloaded".to_string(),
        };
        assert_eq!(err.message(), "model overloaded");
        assert_eq!(err.to_string(), "Provider error (503): model overloaded");
    }

    #[test]
    fn rate_limited_message_mentions_rate_limit() {
        let err = GenerationError::RateLimited;
        assert!(err.message().to_lowercase().contains("rate limit"));
    }

    #[test]
    fn empty_response_message() {
        assert_eq!(
            GenerationError::EmptyResponse.to_string(),
            "Empty response from model"
        );
    }

    #[test]
    fn configuration_error_message() {
        let err = GenerationError::Configuration("bad url".to_string());
        assert_eq!(err.to_string(), "Configuration error: bad url");
    }
}
