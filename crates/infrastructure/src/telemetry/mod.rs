//! Telemetry and logging infrastructure
//!
//! Provides `tracing` subscriber setup for console output.

mod logging;

pub use logging::{LogFormat, LoggingConfig, TelemetryError, init_tracing};
