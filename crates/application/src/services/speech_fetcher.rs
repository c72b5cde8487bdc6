//! Speech fetcher - Cached text-to-speech lookups

use std::{fmt, sync::Arc};

use domain::{MAX_SPEECH_CHARS, SpeechRequest};
use tracing::{debug, info, instrument, warn};

use crate::ports::{AudioCachePort, SpeechSynthesisPort, TtsResult, UnavailableReason};

/// Content key for a normalized speech request.
///
/// Hex blake3 digest of the text bytes followed directly by the voice bytes.
/// An absent voice hashes like an empty one.
pub fn speech_cache_key(text: &str, voice: &str) -> String {
    let mut hasher = blake3::Hasher::new();
    hasher.update(text.as_bytes());
    hasher.update(voice.as_bytes());
    hasher.finalize().to_hex().to_string()
}

/// Fetches speech audio, remembering every outcome per content key
pub struct SpeechFetcher {
    synthesizer: Arc<dyn SpeechSynthesisPort>,
    cache: Arc<dyn AudioCachePort>,
    max_chars: usize,
}

impl fmt::Debug for SpeechFetcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpeechFetcher")
            .field("cache", &self.cache)
            .field("max_chars", &self.max_chars)
            .finish_non_exhaustive()
    }
}

impl SpeechFetcher {
    /// Create a fetcher that truncates to [`MAX_SPEECH_CHARS`]
    pub fn new(synthesizer: Arc<dyn SpeechSynthesisPort>, cache: Arc<dyn AudioCachePort>) -> Self {
        Self::with_max_chars(synthesizer, cache, MAX_SPEECH_CHARS)
    }

    /// Create a fetcher with a custom character ceiling
    pub fn with_max_chars(
        synthesizer: Arc<dyn SpeechSynthesisPort>,
        cache: Arc<dyn AudioCachePort>,
        max_chars: usize,
    ) -> Self {
        Self {
            synthesizer,
            cache,
            max_chars,
        }
    }

    /// Number of cached outcomes, positive and negative
    pub async fn cache_len(&self) -> u64 {
        self.cache.entry_count().await
    }

    /// Get speech audio for `text`.
    ///
    /// Never fails: anything that prevents audio becomes
    /// [`TtsResult::Unavailable`]. Repeated calls with the same normalized
    /// text and voice are served from the cache without a provider call.
    #[instrument(skip(self, text), fields(text_len = text.len(), voice = voice.unwrap_or_default()))]
    pub async fn fetch_tts_audio(&self, text: &str, voice: Option<&str>) -> TtsResult {
        if !self.synthesizer.is_configured() {
            debug!(reason = %UnavailableReason::NotConfigured, "Speech unavailable");
            return TtsResult::Unavailable;
        }

        let request = match SpeechRequest::with_limit(text, voice, self.max_chars) {
            Ok(request) => request,
            Err(_) => {
                debug!(reason = %UnavailableReason::EmptyText, "Speech unavailable");
                return TtsResult::Unavailable;
            },
        };

        let key = speech_cache_key(request.text(), request.voice_or_empty());
        let synthesizer = Arc::clone(&self.synthesizer);

        self.cache
            .get_or_insert_with(
                key,
                Box::pin(async move { synthesize(synthesizer.as_ref(), &request).await }),
            )
            .await
    }
}

async fn synthesize(synthesizer: &dyn SpeechSynthesisPort, request: &SpeechRequest) -> TtsResult {
    debug!(chars = request.char_len(), "Cache miss, synthesizing");

    match synthesizer.synthesize(request.text(), request.voice()).await {
        Ok(audio) if !audio.is_empty() => {
            info!(bytes = audio.len(), "Speech audio ready");
            TtsResult::Success { audio }
        },
        Ok(_) => {
            warn!(reason = %UnavailableReason::NoAudio, "Speech unavailable");
            TtsResult::Unavailable
        },
        Err(reason) => {
            warn!(%reason, "Speech unavailable");
            TtsResult::Unavailable
        },
    }
}

#[cfg(test)]
mod tests {
    use std::{
        collections::HashMap,
        sync::atomic::{AtomicUsize, Ordering},
    };

    use async_trait::async_trait;
    use bytes::Bytes;
    use futures::future::BoxFuture;
    use parking_lot::Mutex;

    use super::*;

    #[derive(Debug, Default)]
    struct MapCache {
        entries: Mutex<HashMap<String, TtsResult>>,
    }

    #[async_trait]
    impl AudioCachePort for MapCache {
        async fn get_or_insert_with(
            &self,
            key: String,
            init: BoxFuture<'_, TtsResult>,
        ) -> TtsResult {
            if let Some(hit) = self.entries.lock().get(&key).cloned() {
                return hit;
            }
            let value = init.await;
            self.entries.lock().insert(key, value.clone());
            value
        }

        async fn entry_count(&self) -> u64 {
            self.entries.lock().len() as u64
        }
    }

    struct StubSynthesizer {
        configured: bool,
        outcome: Result<Bytes, UnavailableReason>,
        calls: AtomicUsize,
        received: Mutex<Vec<(String, Option<String>)>>,
    }

    impl StubSynthesizer {
        fn returning(outcome: Result<Bytes, UnavailableReason>) -> Self {
            Self {
                configured: true,
                outcome,
                calls: AtomicUsize::new(0),
                received: Mutex::new(Vec::new()),
            }
        }

        fn unconfigured() -> Self {
            Self {
                configured: false,
                ..Self::returning(Ok(Bytes::from_static(b"audio")))
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl SpeechSynthesisPort for StubSynthesizer {
        async fn synthesize(
            &self,
            text: &str,
            voice: Option<&str>,
        ) -> Result<Bytes, UnavailableReason> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.received
                .lock()
                .push((text.to_string(), voice.map(str::to_string)));
            self.outcome.clone()
        }

        fn is_configured(&self) -> bool {
            self.configured
        }
    }

    fn fetcher(stub: &Arc<StubSynthesizer>) -> SpeechFetcher {
        SpeechFetcher::new(stub.clone(), Arc::new(MapCache::default()))
    }

    #[test]
    fn cache_key_is_stable_hex() {
        let key = speech_cache_key("Hello", "");
        assert_eq!(key.len(), 64);
        assert_eq!(key, speech_cache_key("Hello", ""));
        assert_ne!(key, speech_cache_key("Hello", "alloy"));
    }

    #[test]
    fn cache_key_concatenates_without_separator() {
        assert_eq!(speech_cache_key("ab", "c"), speech_cache_key("a", "bc"));
    }

    #[tokio::test]
    async fn returns_audio_from_provider() {
        let stub = Arc::new(StubSynthesizer::returning(Ok(Bytes::from_static(b"ID3"))));
        let fetcher = fetcher(&stub);

        let result = fetcher.fetch_tts_audio("Hello", None).await;
        assert_eq!(
            result,
            TtsResult::Success {
                audio: Bytes::from_static(b"ID3")
            }
        );
        assert_eq!(stub.calls(), 1);
    }

    #[tokio::test]
    async fn second_identical_call_is_cached() {
        let stub = Arc::new(StubSynthesizer::returning(Ok(Bytes::from_static(b"ID3"))));
        let fetcher = fetcher(&stub);

        let first = fetcher.fetch_tts_audio("Hello", None).await;
        let second = fetcher.fetch_tts_audio("Hello", None).await;
        assert_eq!(first, second);
        assert_eq!(stub.calls(), 1);
        assert_eq!(fetcher.cache_len().await, 1);
    }

    #[tokio::test]
    async fn surrounding_whitespace_shares_cache_entry() {
        let stub = Arc::new(StubSynthesizer::returning(Ok(Bytes::from_static(b"ID3"))));
        let fetcher = fetcher(&stub);

        fetcher.fetch_tts_audio("Hello", None).await;
        fetcher.fetch_tts_audio("  Hello \n", None).await;
        assert_eq!(stub.calls(), 1);
    }

    #[tokio::test]
    async fn empty_voice_matches_absent_voice() {
        let stub = Arc::new(StubSynthesizer::returning(Ok(Bytes::from_static(b"ID3"))));
        let fetcher = fetcher(&stub);

        fetcher.fetch_tts_audio("Hello", Some("")).await;
        fetcher.fetch_tts_audio("Hello", None).await;
        assert_eq!(stub.calls(), 1);
        assert_eq!(stub.received.lock()[0], ("Hello".to_string(), None));
    }

    #[tokio::test]
    async fn different_voices_are_cached_separately() {
        let stub = Arc::new(StubSynthesizer::returning(Ok(Bytes::from_static(b"ID3"))));
        let fetcher = fetcher(&stub);

        fetcher.fetch_tts_audio("Hello", Some("alloy")).await;
        fetcher.fetch_tts_audio("Hello", Some("nova")).await;
        assert_eq!(stub.calls(), 2);
        assert_eq!(fetcher.cache_len().await, 2);
    }

    #[tokio::test]
    async fn long_text_is_truncated_before_submission() {
        let stub = Arc::new(StubSynthesizer::returning(Ok(Bytes::from_static(b"ID3"))));
        let fetcher = fetcher(&stub);

        let text = "a".repeat(6000);
        fetcher.fetch_tts_audio(&text, None).await;

        let received = stub.received.lock();
        assert_eq!(received[0].0.chars().count(), 5000);
    }

    #[tokio::test]
    async fn texts_sharing_a_prefix_share_an_entry() {
        let stub = Arc::new(StubSynthesizer::returning(Ok(Bytes::from_static(b"ID3"))));
        let fetcher = fetcher(&stub);

        let base = "b".repeat(5000);
        fetcher.fetch_tts_audio(&format!("{base}tail one"), None).await;
        fetcher.fetch_tts_audio(&format!("{base}tail two"), None).await;
        assert_eq!(stub.calls(), 1);
    }

    #[tokio::test]
    async fn unconfigured_provider_is_never_called() {
        let stub = Arc::new(StubSynthesizer::unconfigured());
        let fetcher = fetcher(&stub);

        assert_eq!(fetcher.fetch_tts_audio("Hello", None).await, TtsResult::Unavailable);
        assert_eq!(stub.calls(), 0);
        assert_eq!(fetcher.cache_len().await, 0);
    }

    #[tokio::test]
    async fn blank_text_is_never_sent() {
        let stub = Arc::new(StubSynthesizer::returning(Ok(Bytes::from_static(b"ID3"))));
        let fetcher = fetcher(&stub);

        assert_eq!(fetcher.fetch_tts_audio("   ", None).await, TtsResult::Unavailable);
        assert_eq!(fetcher.fetch_tts_audio("", Some("alloy")).await, TtsResult::Unavailable);
        assert_eq!(stub.calls(), 0);
    }

    #[tokio::test]
    async fn failures_are_cached_too() {
        let stub = Arc::new(StubSynthesizer::returning(Err(UnavailableReason::HttpStatus(500))));
        let fetcher = fetcher(&stub);

        assert_eq!(fetcher.fetch_tts_audio("Hello", None).await, TtsResult::Unavailable);
        assert_eq!(fetcher.fetch_tts_audio("Hello", None).await, TtsResult::Unavailable);
        assert_eq!(stub.calls(), 1);
        assert_eq!(fetcher.cache_len().await, 1);
    }

    #[tokio::test]
    async fn empty_audio_is_unavailable() {
        let stub = Arc::new(StubSynthesizer::returning(Ok(Bytes::new())));
        let fetcher = fetcher(&stub);

        assert_eq!(fetcher.fetch_tts_audio("Hello", None).await, TtsResult::Unavailable);
    }

    #[tokio::test]
    async fn custom_ceiling_applies() {
        let stub = Arc::new(StubSynthesizer::returning(Ok(Bytes::from_static(b"ID3"))));
        let fetcher =
            SpeechFetcher::with_max_chars(stub.clone(), Arc::new(MapCache::default()), 3);

        fetcher.fetch_tts_audio("abcdef", None).await;
        assert_eq!(stub.received.lock()[0].0, "abc");
    }
}
