//! Correction memoization.
//!
//! Repair calls are billed model invocations, so identical repair requests
//! must not be recomputed. The cache maps a content digest of the request
//! ([`CacheKey`]) to the corrected edit, bounded by a fixed capacity with
//! least-recently-used eviction.
//!
//! | Component | Description |
//! |-----------|-------------|
//! | [`CacheKey`] | SHA-256 digest of the ordered request fields |
//! | [`CorrectionCache`] | Bounded LRU store shared across in-flight tasks |
//! | [`CacheStats`] | Hit/miss/set counters |

mod key;
mod store;

pub use key::CacheKey;
pub use store::{CacheStats, CorrectionCache};
