//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The generation provider rejected or failed the request.
    /// Carries the provider's own message text.
    #[error("{0}")]
    Provider(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Why a paraphrase request produced no text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParaphraseFailure {
    /// Neither an explicit key nor a configured default key was available
    #[error("Generation API key is missing")]
    AuthMissing,

    /// Provider reported a quota or rate limit condition
    #[error("Generation rate limit or quota exceeded")]
    RateLimited,

    /// Any other provider failure, with the provider's message
    #[error("Provider error: {0}")]
    ProviderError(String),
}

impl ParaphraseFailure {
    /// Classify a provider failure message.
    ///
    /// Messages mentioning "quota" or "rate limit" (any case) are rate
    /// limits; everything else keeps the raw message.
    pub fn from_provider_message(message: &str) -> Self {
        let lowered = message.to_lowercase();
        if lowered.contains("quota") || lowered.contains("rate limit") {
            Self::RateLimited
        } else {
            Self::ProviderError(message.to_string())
        }
    }

    /// Text shown to the person who asked for the paraphrase
    pub fn user_message(&self) -> String {
        match self {
            Self::AuthMissing => "GEMINI_API_KEY is missing. Please provide it in the API \
                                  Configuration section or set it in the environment."
                .to_string(),
            Self::RateLimited => "Gemini API rate limit or quota exceeded. Please try again \
                                  later or use a different API key."
                .to_string(),
            Self::ProviderError(message) => format!("Error: {message}"),
        }
    }
}

/// Outcome of the full validate-then-generate flow
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParaphraseError {
    /// Input was rejected before any provider call
    #[error(transparent)]
    Invalid(#[from] DomainError),

    /// Input was valid but the provider produced no text
    #[error(transparent)]
    Failed(#[from] ParaphraseFailure),
}

impl ParaphraseError {
    /// Text shown to the person who asked for the paraphrase
    pub fn user_message(&self) -> String {
        match self {
            Self::Invalid(err) => err.user_message(),
            Self::Failed(failure) => failure.user_message(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quota_messages_are_rate_limits() {
        assert_eq!(
            ParaphraseFailure::from_provider_message("Quota exceeded for project"),
            ParaphraseFailure::RateLimited
        );
        assert_eq!(
            ParaphraseFailure::from_provider_message("You hit the RATE LIMIT"),
            ParaphraseFailure::RateLimited
        );
    }

    #[test]
    fn other_messages_are_kept_verbatim() {
        assert_eq!(
            ParaphraseFailure::from_provider_message("model overloaded"),
            ParaphraseFailure::ProviderError("model overloaded".to_string())
        );
    }

    #[test]
    fn rate_is_not_enough_on_its_own() {
        assert_eq!(
            ParaphraseFailure::from_provider_message("ratelimit"),
            ParaphraseFailure::ProviderError("ratelimit".to_string())
        );
    }

    #[test]
    fn user_messages() {
        assert_eq!(
            ParaphraseFailure::AuthMissing.user_message(),
            "GEMINI_API_KEY is missing. Please provide it in the API Configuration section \
             or set it in the environment."
        );
        assert_eq!(
            ParaphraseFailure::RateLimited.user_message(),
            "Gemini API rate limit or quota exceeded. Please try again later or use a \
             different API key."
        );
        assert_eq!(
            ParaphraseFailure::ProviderError("model overloaded".into()).user_message(),
            "Error: model overloaded"
        );
    }

    #[test]
    fn paraphrase_error_delegates_user_message() {
        let err = ParaphraseError::from(DomainError::EmptyInput);
        assert_eq!(err.user_message(), "Please enter some text to paraphrase!");

        let err = ParaphraseError::from(ParaphraseFailure::RateLimited);
        assert_eq!(err.user_message(), ParaphraseFailure::RateLimited.user_message());
    }

    #[test]
    fn provider_error_displays_raw_message() {
        let err = ApplicationError::Provider("model overloaded".to_string());
        assert_eq!(err.to_string(), "model overloaded");
    }
}
