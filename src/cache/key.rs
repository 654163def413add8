//! Cache key generation.

use crate::types::EditRequest;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// A content digest identifying one repair request.
///
/// The key is a pure function of the request's five fields: identical field
/// values always produce the same key, and any field difference changes it.
/// Nothing else (timestamps, random ids) enters the derivation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CacheKey(String);

impl CacheKey {
    /// Derive the key for a request.
    ///
    /// The five fields are serialized as a JSON array in a fixed order
    /// (current content, original text, replacement text, instruction,
    /// error message) and hashed with SHA-256. The order is part of the
    /// key format; reordering silently invalidates every existing entry.
    pub fn for_request(request: &EditRequest) -> Self {
        let canonical = serde_json::to_string(&[
            request.current_content.as_str(),
            request.original_text.as_str(),
            request.replacement_text.as_str(),
            request.instruction.as_str(),
            request.error_message.as_str(),
        ])
        .unwrap_or_default();
        let mut hasher = Sha256::new();
        hasher.update(canonical.as_bytes());
        let hash: String = hasher.finalize().iter().map(|b| format!("{:02x}", b)).collect();
        Self(hash)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CacheKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
