//! Speech synthesis request

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Maximum number of characters sent for synthesis
pub const MAX_SPEECH_CHARS: usize = 5000;

/// Text and optional voice for one synthesis call
///
/// The text is trimmed and cut to a character prefix on construction, so
/// the value held here is exactly what gets hashed and submitted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpeechRequest {
    text: String,
    voice: Option<String>,
}

impl SpeechRequest {
    /// Build a request using [`MAX_SPEECH_CHARS`]
    pub fn new(text: &str, voice: Option<&str>) -> Result<Self, DomainError> {
        Self::with_limit(text, voice, MAX_SPEECH_CHARS)
    }

    /// Build a request with a custom character ceiling
    pub fn with_limit(
        text: &str,
        voice: Option<&str>,
        max_chars: usize,
    ) -> Result<Self, DomainError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyInput);
        }

        let text = match trimmed.char_indices().nth(max_chars) {
            Some((cut, _)) => trimmed[..cut].to_string(),
            None => trimmed.to_string(),
        };

        Ok(Self {
            text,
            voice: voice.filter(|v| !v.is_empty()).map(str::to_string),
        })
    }

    /// Text to synthesize
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Requested voice, if any
    #[must_use]
    pub fn voice(&self) -> Option<&str> {
        self.voice.as_deref()
    }

    /// Voice identifier, empty when none was requested
    #[must_use]
    pub fn voice_or_empty(&self) -> &str {
        self.voice.as_deref().unwrap_or_default()
    }

    /// Number of characters in the text
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_text_is_rejected() {
        assert_eq!(SpeechRequest::new("", None), Err(DomainError::EmptyInput));
        assert_eq!(
            SpeechRequest::new(" \n\t", Some("nova")),
            Err(DomainError::EmptyInput)
        );
    }

    #[test]
    fn text_is_trimmed() {
        let request = SpeechRequest::new("  hello  ", None).unwrap();
        assert_eq!(request.text(), "hello");
    }

    #[test]
    fn long_text_is_cut_to_limit() {
        let text = "a".repeat(MAX_SPEECH_CHARS + 250);
        let request = SpeechRequest::new(&text, None).unwrap();
        assert_eq!(request.char_len(), MAX_SPEECH_CHARS);
    }

    #[test]
    fn short_text_is_untouched() {
        let request = SpeechRequest::new("short text", None).unwrap();
        assert_eq!(request.text(), "short text");
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let text = "ü".repeat(10);
        let request = SpeechRequest::with_limit(&text, None, 4).unwrap();
        assert_eq!(request.text(), "üüüü");
    }

    #[test]
    fn empty_voice_becomes_none() {
        let request = SpeechRequest::new("hi", Some("")).unwrap();
        assert_eq!(request.voice(), None);
        assert_eq!(request.voice_or_empty(), "");
    }

    #[test]
    fn voice_is_kept() {
        let request = SpeechRequest::new("hi", Some("jess")).unwrap();
        assert_eq!(request.voice(), Some("jess"));
        assert_eq!(request.voice_or_empty(), "jess");
    }
}
