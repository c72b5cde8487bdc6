//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer.
//! Contains the provider adapters, the audio cache, configuration loading
//! and tracing setup.

pub mod adapters;
pub mod cache;
pub mod config;
pub mod services;
pub mod telemetry;

pub use adapters::*;
pub use cache::MokaAudioCache;
pub use config::AppConfig;
pub use services::AppServices;
pub use telemetry::{LogFormat, LoggingConfig, TelemetryError, init_tracing};
