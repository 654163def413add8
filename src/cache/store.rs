//! Bounded LRU store for corrected edits.

use super::key::CacheKey;
use crate::types::CorrectedEdit;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

/// Counters for cache effectiveness, read without locking the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub sets: u64,
}

impl CacheStats {
    pub fn hit_ratio(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

struct AtomicStats {
    hits: AtomicU64,
    misses: AtomicU64,
    sets: AtomicU64,
}

impl AtomicStats {
    fn new() -> Self {
        Self {
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            sets: AtomicU64::new(0),
        }
    }

    fn to_stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            sets: self.sets.load(Ordering::Relaxed),
        }
    }
}

/// Capacity-bounded key→correction store with least-recently-used eviction.
///
/// Shared by every in-flight correction task. Writes are last-write-wins per
/// key; the store makes no atomicity promise across a get-then-set sequence
/// (results are idempotent for identical inputs, so the race is benign).
pub struct CorrectionCache {
    entries: Mutex<LruCache<CacheKey, CorrectedEdit>>,
    stats: AtomicStats,
}

impl CorrectionCache {
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
            stats: AtomicStats::new(),
        }
    }

    /// Look up a correction, refreshing its recency on a hit.
    pub fn get(&self, key: &CacheKey) -> Option<CorrectedEdit> {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        match entries.get(key) {
            Some(edit) => {
                self.stats.hits.fetch_add(1, Ordering::Relaxed);
                Some(edit.clone())
            }
            None => {
                self.stats.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
        }
    }

    /// Insert a correction, evicting the least-recently-used entry at capacity.
    pub fn set(&self, key: CacheKey, value: CorrectedEdit) {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.put(key, value);
        self.stats.sets.fetch_add(1, Ordering::Relaxed);
    }

    /// Empty the cache unconditionally. Exposed for test isolation only;
    /// normal operation never calls this.
    pub fn clear(&self) {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn stats(&self) -> CacheStats {
        self.stats.to_stats()
    }
}
