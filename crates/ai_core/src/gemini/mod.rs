//! Google Generative Language (Gemini) integration

mod client;

pub use client::GeminiTextGenerator;
