//! Cache implementations
//!
//! - `MokaAudioCache`: in-memory speech outcome cache with per-key
//!   single-flight population

mod moka_audio_cache;

pub use moka_audio_cache::MokaAudioCache;
