//! Speech provider implementations

pub mod assemblyai;
