//! Audio cache port definition
//!
//! Stores speech outcomes by content key for the lifetime of the process.
//! Negative outcomes are stored too.

use async_trait::async_trait;
use futures::future::BoxFuture;

use super::speech_port::TtsResult;

/// Cache of speech outcomes keyed by a content digest
#[async_trait]
pub trait AudioCachePort: Send + Sync + std::fmt::Debug {
    /// Return the cached outcome for `key`, or run `init` and store its result.
    ///
    /// Concurrent callers for the same missing key must observe a single
    /// evaluation of `init`.
    async fn get_or_insert_with(&self, key: String, init: BoxFuture<'_, TtsResult>) -> TtsResult;

    /// Number of cached entries
    async fn entry_count(&self) -> u64;
}
