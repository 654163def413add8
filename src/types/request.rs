//! The failed-edit repair request.

use serde::{Deserialize, Serialize};

/// One failed search/replace edit, captured for repair.
///
/// All fields are plain text owned for the duration of a single call; the
/// request has no identity beyond its content, which is what the cache key
/// is derived from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditRequest {
    /// What the edit was trying to accomplish.
    pub instruction: String,
    /// The `search` text that failed to match.
    pub original_text: String,
    /// The `replace` text of the failed edit.
    pub replacement_text: String,
    /// The error produced when the edit was applied.
    pub error_message: String,
    /// Full current content of the target file.
    pub current_content: String,
}

impl EditRequest {
    pub fn new(
        instruction: impl Into<String>,
        original_text: impl Into<String>,
        replacement_text: impl Into<String>,
        error_message: impl Into<String>,
        current_content: impl Into<String>,
    ) -> Self {
        Self {
            instruction: instruction.into(),
            original_text: original_text.into(),
            replacement_text: replacement_text.into(),
            error_message: error_message.into(),
            current_content: current_content.into(),
        }
    }
}
