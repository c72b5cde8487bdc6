//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod generation_adapter;
mod speech_adapter;

pub use generation_adapter::GeminiGenerationAdapter;
pub use speech_adapter::AssemblyAiSpeechAdapter;
