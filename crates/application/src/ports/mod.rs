//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod audio_cache_port;
mod generation_port;
mod speech_port;

pub use audio_cache_port::AudioCachePort;
pub use generation_port::GenerationPort;
#[cfg(test)]
pub use generation_port::MockGenerationPort;
pub use speech_port::{SpeechSynthesisPort, TtsResult, UnavailableReason};
