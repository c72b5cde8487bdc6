//! AI Speech - Text-to-Speech client
//!
//! Provides the `SpeechSynthesizer` trait and an AssemblyAI-style provider
//! that turns text into audio bytes.
//!
//! # Architecture
//!
//! This crate follows the ports & adapters pattern:
//! - `ports` module defines the trait (port)
//! - `providers` module contains the concrete implementation (adapter)
//!
//! # Example
//!
//! ```ignore
//! use ai_speech::{AssemblyAiSpeechProvider, SpeechConfig, SpeechSynthesizer};
//!
//! let provider = AssemblyAiSpeechProvider::new(config)?;
//! let audio = provider.synthesize("Hello, world!", None).await?;
//! std::fs::write("hello.mp3", audio.data())?;
//! ```

pub mod config;
pub mod error;
pub mod ports;
pub mod providers;
pub mod types;

pub use config::SpeechConfig;
pub use error::SpeechError;
pub use ports::SpeechSynthesizer;
pub use providers::assemblyai::AssemblyAiSpeechProvider;
pub use types::{AudioSource, SynthesizedAudio};
