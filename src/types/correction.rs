//! The corrected edit returned by the model and memoized by the service.

use serde::{Deserialize, Serialize};

/// A repaired search/replace pair.
///
/// `search` and `replace` are the correction proper. `explanation` and
/// `no_changes_required` are descriptive metadata: a well-formed model
/// response always carries an explanation, and may flag that the file
/// already reflects the intended change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorrectedEdit {
    /// Text to find in the current file content.
    pub search: String,
    /// Text to substitute for `search`.
    pub replace: String,
    /// Human-readable rationale for the correction.
    pub explanation: String,
    /// True when the model judged that no edit is necessary.
    #[serde(default)]
    pub no_changes_required: bool,
}
