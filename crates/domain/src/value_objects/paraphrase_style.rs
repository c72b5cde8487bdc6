//! Paraphrasing style value object

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// How the provider should transform the input text
///
/// Each style maps to a fixed instruction sentence that opens the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ParaphraseStyle {
    /// Same meaning, natural wording
    #[default]
    Balanced,
    /// Formal, professional tone
    Formal,
    /// Casual, conversational style
    Casual,
    /// Shorter and more direct
    Concise,
    /// Expanded with more detail
    Detailed,
}

impl ParaphraseStyle {
    /// The instruction sentence sent ahead of the user text
    #[must_use]
    pub const fn instruction(self) -> &'static str {
        match self {
            Self::Balanced => "Paraphrase this text naturally while keeping the same meaning:",
            Self::Formal => "Rewrite this text in a formal, professional tone:",
            Self::Casual => "Rewrite this text in a casual, conversational style:",
            Self::Concise => "Make this text shorter and more direct:",
            Self::Detailed => "Expand this text with more detail:",
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Balanced => "Balanced",
            Self::Formal => "Formal",
            Self::Casual => "Casual",
            Self::Concise => "Concise",
            Self::Detailed => "Detailed",
        }
    }

    /// All styles in the order they are offered to users
    #[must_use]
    pub const fn all() -> [Self; 5] {
        [
            Self::Balanced,
            Self::Formal,
            Self::Casual,
            Self::Concise,
            Self::Detailed,
        ]
    }
}

impl fmt::Display for ParaphraseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ParaphraseStyle {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|style| style.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::UnknownStyle(s.to_string()))
    }
}
