//! Value Objects - Immutable, identity-less domain primitives

mod paraphrase_style;
mod word_count;

pub use paraphrase_style::ParaphraseStyle;
pub use word_count::{MAX_WORDS, WordCount, count_words, validate_input};
