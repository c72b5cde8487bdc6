//! Domain entities - Requests constructed once per call

mod paraphrase_request;
mod speech_request;

pub use paraphrase_request::{ParaphraseOptions, ParaphraseRequest};
pub use speech_request::{MAX_SPEECH_CHARS, SpeechRequest};
