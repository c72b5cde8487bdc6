//! Application layer - Use cases and orchestration
//!
//! Wires the domain's validation rules to the generation and speech
//! providers through ports. Adapters in the infrastructure layer
//! implement these ports.

pub mod error;
pub mod ports;
pub mod services;

pub use error::{ApplicationError, ParaphraseError, ParaphraseFailure};
pub use ports::*;
pub use services::*;
