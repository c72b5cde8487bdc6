//! Paraphrase request and prompt composition

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;
use crate::value_objects::{ParaphraseStyle, WordCount, validate_input};

const PRESERVE_TONE_CLAUSE: &str = " Maintain the original emotional tone.";
const MAINTAIN_LENGTH_CLAUSE: &str = " Keep the length similar to the original.";

/// Style and toggles chosen for a paraphrase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParaphraseOptions {
    /// Transformation to apply
    #[serde(default)]
    pub style: ParaphraseStyle,
    /// Ask the model to keep the emotional tone
    #[serde(default = "default_true")]
    pub preserve_tone: bool,
    /// Ask the model to keep roughly the same length
    #[serde(default = "default_true")]
    pub maintain_length: bool,
}

const fn default_true() -> bool {
    true
}

impl Default for ParaphraseOptions {
    fn default() -> Self {
        Self {
            style: ParaphraseStyle::default(),
            preserve_tone: true,
            maintain_length: true,
        }
    }
}

impl ParaphraseOptions {
    /// Options for a given style with both toggles on
    #[must_use]
    pub fn with_style(style: ParaphraseStyle) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    /// Set whether the emotional tone is preserved
    #[must_use]
    pub const fn preserve_tone(mut self, on: bool) -> Self {
        self.preserve_tone = on;
        self
    }

    /// Set whether the length is kept similar
    #[must_use]
    pub const fn maintain_length(mut self, on: bool) -> Self {
        self.maintain_length = on;
        self
    }

    /// Build the provider prompt for `text`
    ///
    /// The style instruction comes first, then the enabled clauses, then a
    /// blank line and the text exactly as given.
    #[must_use]
    pub fn compose_prompt(&self, text: &str) -> String {
        let mut prompt = String::from(self.style.instruction());
        if self.preserve_tone {
            prompt.push_str(PRESERVE_TONE_CLAUSE);
        }
        if self.maintain_length {
            prompt.push_str(MAINTAIN_LENGTH_CLAUSE);
        }
        prompt.push_str("\n\n");
        prompt.push_str(text);
        prompt
    }
}

/// A validated request to paraphrase a piece of text
///
/// Construction runs the input validator, so an existing request always
/// holds non-blank text within the word ceiling.
#[derive(Clone, PartialEq, Eq)]
pub struct ParaphraseRequest {
    text: String,
    options: ParaphraseOptions,
    api_key: Option<String>,
    word_count: WordCount,
}

impl ParaphraseRequest {
    /// Validate `text` and build a request
    pub fn new(text: impl Into<String>, options: ParaphraseOptions) -> Result<Self, DomainError> {
        let text = text.into();
        let word_count = validate_input(&text)?;
        Ok(Self {
            text,
            options,
            api_key: None,
            word_count,
        })
    }

    /// Attach a caller-supplied credential
    ///
    /// Empty keys are ignored so the configured default still applies.
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        let key = api_key.into();
        self.api_key = (!key.is_empty()).then_some(key);
        self
    }

    /// The text to paraphrase
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Chosen style and toggles
    #[must_use]
    pub const fn options(&self) -> ParaphraseOptions {
        self.options
    }

    /// Caller-supplied credential, if any
    #[must_use]
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// Words counted during validation
    #[must_use]
    pub const fn word_count(&self) -> WordCount {
        self.word_count
    }

    /// The prompt this request sends to the provider
    #[must_use]
    pub fn prompt(&self) -> String {
        self.options.compose_prompt(&self.text)
    }
}

impl fmt::Debug for ParaphraseRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParaphraseRequest")
            .field("text_len", &self.text.len())
            .field("options", &self.options)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("word_count", &self.word_count)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formal_prompt_with_tone_only() {
        let options = ParaphraseOptions::with_style(ParaphraseStyle::Formal)
            .preserve_tone(true)
            .maintain_length(false);
        assert_eq!(
            options.compose_prompt("Hi."),
            "Rewrite this text in a formal, professional tone: Maintain the original emotional tone.\n\nHi."
        );
    }

    #[test]
    fn prompt_with_both_clauses_keeps_order() {
        let options = ParaphraseOptions::default();
        assert_eq!(
            options.compose_prompt("Text"),
            "Paraphrase this text naturally while keeping the same meaning: \
             Maintain the original emotional tone. \
             Keep the length similar to the original.\n\nText"
        );
    }

    #[test]
    fn prompt_without_clauses() {
        let options = ParaphraseOptions::with_style(ParaphraseStyle::Concise)
            .preserve_tone(false)
            .maintain_length(false);
        assert_eq!(
            options.compose_prompt("abc"),
            "Make this text shorter and more direct:\n\nabc"
        );
    }

    #[test]
    fn prompt_keeps_text_verbatim() {
        let raw = "  {braces} \"quotes\" \n<tags>  ";
        let prompt = ParaphraseOptions::default().compose_prompt(raw);
        assert!(prompt.ends_with(&format!("\n\n{raw}")));
    }

    #[test]
    fn default_options_enable_both_toggles() {
        let options = ParaphraseOptions::default();
        assert_eq!(options.style, ParaphraseStyle::Balanced);
        assert!(options.preserve_tone);
        assert!(options.maintain_length);
    }

    #[test]
    fn options_deserialize_with_defaults() {
        let options: ParaphraseOptions = serde_json::from_str(r#"{"style":"casual"}"#).unwrap();
        assert_eq!(options.style, ParaphraseStyle::Casual);
        assert!(options.preserve_tone);
        assert!(options.maintain_length);
    }

    #[test]
    fn request_validates_input() {
        assert_eq!(
            ParaphraseRequest::new("   ", ParaphraseOptions::default()),
            Err(DomainError::EmptyInput)
        );
        assert!(matches!(
            ParaphraseRequest::new("x ".repeat(801), ParaphraseOptions::default()),
            Err(DomainError::TooLong { words: 801, .. })
        ));
    }

    #[test]
    fn request_records_word_count() {
        let request = ParaphraseRequest::new("one two three", ParaphraseOptions::default()).unwrap();
        assert_eq!(request.word_count().value(), 3);
    }

    #[test]
    fn empty_api_key_is_ignored() {
        let request = ParaphraseRequest::new("hello", ParaphraseOptions::default())
            .unwrap()
            .with_api_key("");
        assert!(request.api_key().is_none());

        let request = request.with_api_key("  ");
        assert_eq!(request.api_key(), Some("  "));

        let request = request.with_api_key("key-123");
        assert_eq!(request.api_key(), Some("key-123"));
    }

    #[test]
    fn debug_redacts_api_key() {
        let request = ParaphraseRequest::new("hello", ParaphraseOptions::default())
            .unwrap()
            .with_api_key("super-secret");
        let debug = format!("{request:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("[REDACTED]"));
    }
}
