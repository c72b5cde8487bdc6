//! Word counting and the input word ceiling

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Maximum number of words accepted for paraphrasing
pub const MAX_WORDS: usize = 800;

/// Word characters are alphanumerics and underscore
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Count the runs of word characters in `text`
///
/// Punctuation and whitespace separate words and are never counted.
/// Blank input yields zero.
///
/// ```
/// use domain::count_words;
///
/// assert_eq!(count_words("hello, world!"), 2);
/// assert_eq!(count_words("   "), 0);
/// ```
#[must_use]
pub fn count_words(text: &str) -> usize {
    text.split(|c: char| !is_word_char(c))
        .filter(|run| !run.is_empty())
        .count()
}

/// Number of words in a piece of input, measured against [`MAX_WORDS`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordCount(usize);

impl WordCount {
    /// Measure a piece of text
    #[must_use]
    pub fn of(text: &str) -> Self {
        Self(count_words(text))
    }

    /// The raw count
    #[must_use]
    pub const fn value(self) -> usize {
        self.0
    }

    /// The ceiling this count is compared against
    #[must_use]
    pub const fn limit(self) -> usize {
        MAX_WORDS
    }

    /// Whether the count is above the ceiling
    #[must_use]
    pub const fn exceeds_limit(self) -> bool {
        self.0 > MAX_WORDS
    }

    /// Whether no words were found
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for WordCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, MAX_WORDS)
    }
}

/// Check raw input before any provider call is made
///
/// Blank input is rejected with [`DomainError::EmptyInput`], input above
/// [`MAX_WORDS`] with [`DomainError::TooLong`].
pub fn validate_input(text: &str) -> Result<WordCount, DomainError> {
    if text.trim().is_empty() {
        return Err(DomainError::EmptyInput);
    }

    let count = WordCount::of(text);
    if count.exceeds_limit() {
        return Err(DomainError::TooLong {
            words: count.value(),
            limit: MAX_WORDS,
        });
    }

    Ok(count)
}
