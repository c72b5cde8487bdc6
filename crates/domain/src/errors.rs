//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Input is empty or contains only whitespace
    #[error("Input text is empty")]
    EmptyInput,

    /// Input has more words than allowed
    #[error("Input too long: {words} words exceeds maximum of {limit}")]
    TooLong {
        /// Number of words in the input
        words: usize,
        /// Maximum allowed word count
        limit: usize,
    },

    /// Unknown paraphrase style name
    #[error("Unknown paraphrase style: {0}")]
    UnknownStyle(String),
}

impl DomainError {
    /// Message suitable for showing to the person who typed the input
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::EmptyInput => "Please enter some text to paraphrase!".to_string(),
            Self::TooLong { limit, .. } => {
                format!("Text exceeds {limit} words. Please shorten your text.")
            },
            Self::UnknownStyle(name) => format!(
                "Unknown paraphrasing style '{name}'. Choose Balanced, Formal, Casual, Concise or Detailed."
            ),
        }
    }
}
