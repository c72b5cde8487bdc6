//! AI Core - Hosted text generation
//!
//! Provides the `TextGenerator` abstraction and a client for Google's
//! Generative Language (`generateContent`) API.

pub mod config;
pub mod error;
pub mod gemini;
pub mod ports;

pub use config::GenerationConfig;
pub use error::GenerationError;
pub use gemini::GeminiTextGenerator;
pub use ports::{GenerationRequest, GenerationResponse, TextGenerator, TokenUsage};
