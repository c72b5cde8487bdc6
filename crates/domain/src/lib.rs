//! Domain layer for the paraphraser
//!
//! Contains the pure rules of the tool: word counting and input validation,
//! paraphrase style templates and prompt composition, and speech request
//! normalization. This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
