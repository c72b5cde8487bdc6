//! Generation port - Interface for hosted text generation

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use secrecy::SecretString;

use crate::error::ApplicationError;

/// Port for single-prompt text generation
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GenerationPort: Send + Sync {
    /// Send one prompt to `model` and return the generated text.
    ///
    /// Failures come back as [`ApplicationError::Provider`] carrying the
    /// provider's message so callers can classify them.
    async fn generate(
        &self,
        api_key: &SecretString,
        model: &str,
        prompt: &str,
    ) -> Result<String, ApplicationError>;
}
