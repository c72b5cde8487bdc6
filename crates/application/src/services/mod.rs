//! Application services
//!
//! Services orchestrate domain objects and ports to implement use cases.

mod paraphrase_service;
mod speech_fetcher;

pub use paraphrase_service::{ParaphraseService, ParaphraseSettings};
pub use speech_fetcher::{SpeechFetcher, speech_cache_key};
