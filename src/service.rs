//! The edit correction service.

use crate::cache::{CacheKey, CacheStats, CorrectionCache};
use crate::client::ModelClient;
use crate::context::RequestContext;
use crate::invoke::{Invoker, DEFAULT_TIMEOUT};
use crate::prompt;
use crate::structured::corrected_edit_schema;
use crate::types::{CorrectedEdit, EditRequest};
use crate::{Error, ErrorContext};
use std::num::NonZeroUsize;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Default number of corrections kept before LRU eviction.
pub const DEFAULT_CACHE_CAPACITY: usize = 50;

/// Default model the correction call targets ("provider/model" form).
pub const DEFAULT_MODEL: &str = "anthropic/claude-3-5-haiku";

/// Configuration for [`EditCorrectionService`].
#[derive(Debug, Clone)]
pub struct CorrectionConfig {
    pub cache_capacity: usize,
    pub timeout: Duration,
    pub model: String,
}

impl Default for CorrectionConfig {
    fn default() -> Self {
        Self {
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            timeout: DEFAULT_TIMEOUT,
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

impl CorrectionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = capacity;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

/// Memoized, timeout-bounded repair of failed search/replace edits.
///
/// The service owns the correction cache for the life of the process (it is
/// cleared only by the test-only [`reset_cache`](Self::reset_cache)). Each
/// call is an independent task; the cache is the only shared state.
/// Concurrent calls for the same key may each invoke the model — there is no
/// single-flight join — which is safe because identical inputs produce
/// interchangeable results and cache writes are last-write-wins.
pub struct EditCorrectionService {
    cache: CorrectionCache,
    invoker: Invoker,
    model: String,
}

impl EditCorrectionService {
    pub fn new(config: CorrectionConfig) -> Result<Self, Error> {
        let capacity = NonZeroUsize::new(config.cache_capacity).ok_or_else(|| {
            Error::configuration_with_context(
                "cache capacity must be non-zero",
                ErrorContext::new()
                    .with_field_path("config.cache_capacity")
                    .with_source("correction_config"),
            )
        })?;
        Ok(Self {
            cache: CorrectionCache::new(capacity),
            invoker: Invoker::new(config.timeout),
            model: config.model,
        })
    }

    /// Ask the model for a corrected search/replace pair for a failed edit.
    ///
    /// Returns the memoized correction when one exists for the request's
    /// content; otherwise composes the repair prompt and makes exactly one
    /// timeout-bounded model call. `None` means "no correction available"
    /// (timeout, cancellation, or any model-side failure) and is not an
    /// error: callers fall back to surfacing the original edit failure.
    pub async fn correct_edit(
        &self,
        request: &EditRequest,
        client: &dyn ModelClient,
        prompt_id: Option<&str>,
        cancel: &CancellationToken,
    ) -> Option<CorrectedEdit> {
        let ctx = RequestContext::resolve(prompt_id);
        let key = CacheKey::for_request(request);

        if let Some(cached) = self.cache.get(&key) {
            tracing::debug!(prompt_id = ctx.prompt_id(), key = %key, "correction cache hit");
            return Some(cached);
        }
        tracing::debug!(prompt_id = ctx.prompt_id(), key = %key, "correction cache miss");

        let composed = prompt::compose(request);
        let result = self
            .invoker
            .invoke(
                client,
                composed,
                corrected_edit_schema(),
                &self.model,
                ctx.prompt_id(),
                cancel,
            )
            .await;

        match result {
            Some(edit) => {
                // Only a fully successful response is ever written back.
                self.cache.set(key, edit.clone());
                Some(edit)
            }
            None => None,
        }
    }

    /// Empty the correction cache. Test isolation only.
    pub fn reset_cache(&self) {
        self.cache.clear();
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_capacity_is_a_configuration_error() {
        let err = EditCorrectionService::new(CorrectionConfig::new().with_cache_capacity(0))
            .err()
            .unwrap();
        assert!(matches!(err, Error::Configuration { .. }));
    }

    #[test]
    fn test_config_builder() {
        let config = CorrectionConfig::new()
            .with_cache_capacity(8)
            .with_timeout(Duration::from_secs(5))
            .with_model("test-model");
        assert_eq!(config.cache_capacity, 8);
        assert_eq!(config.timeout, Duration::from_secs(5));
        let service = EditCorrectionService::new(config).unwrap();
        assert_eq!(service.model(), "test-model");
    }
}
