//! Moka in-memory audio cache implementation
//!
//! Unbounded, lives as long as the process. Entries are never evicted, so a
//! key that once failed keeps answering `Unavailable`.

use std::sync::atomic::{AtomicU64, Ordering};

use application::ports::{AudioCachePort, TtsResult};
use async_trait::async_trait;
use futures::future::BoxFuture;
use moka::future::Cache;
use tracing::{debug, instrument};

/// Moka-based cache of speech outcomes
///
/// Concurrent lookups of the same missing key are coalesced: one caller runs
/// the initializer, the others wait for and share its result.
pub struct MokaAudioCache {
    cache: Cache<String, TtsResult>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl std::fmt::Debug for MokaAudioCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MokaAudioCache")
            .field("entries", &self.cache.entry_count())
            .field("hits", &self.hits.load(Ordering::Relaxed))
            .field("misses", &self.misses.load(Ordering::Relaxed))
            .finish()
    }
}

impl MokaAudioCache {
    /// Create an empty, unbounded cache
    #[must_use]
    pub fn new() -> Self {
        Self {
            cache: Cache::builder().name("speech-audio").build(),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Lookups answered from the cache
    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    /// Lookups that ran the initializer
    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }
}

impl Default for MokaAudioCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AudioCachePort for MokaAudioCache {
    #[instrument(skip(self, init), level = "debug")]
    async fn get_or_insert_with(&self, key: String, init: BoxFuture<'_, TtsResult>) -> TtsResult {
        let entry = self.cache.entry(key).or_insert_with(init).await;

        if entry.is_fresh() {
            self.misses.fetch_add(1, Ordering::Relaxed);
            debug!(key = %entry.key(), "Cache miss");
        } else {
            self.hits.fetch_add(1, Ordering::Relaxed);
            debug!(key = %entry.key(), "Cache hit");
        }

        entry.into_value()
    }

    async fn entry_count(&self) -> u64 {
        self.cache.run_pending_tasks().await;
        self.cache.entry_count()
    }
}
