//! Per-call correlation context.
//!
//! The prompt id correlates one correction call with the surrounding
//! session. It is passed explicitly rather than read from ambient state;
//! when the caller has none, a fallback id is synthesized and a warning is
//! emitted, and the call proceeds normally.

use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Resolved correlation context for one correction call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    prompt_id: String,
}

impl RequestContext {
    /// Resolve the context from the caller-supplied prompt id.
    ///
    /// Absence is non-fatal: a fallback id built from the current time and a
    /// random suffix is used instead, and a warning records that no prompt
    /// id was available.
    pub fn resolve(prompt_id: Option<&str>) -> Self {
        match prompt_id {
            Some(id) if !id.is_empty() => Self {
                prompt_id: id.to_string(),
            },
            _ => {
                let fallback = Self::synthesize();
                tracing::warn!(
                    fallback_id = %fallback,
                    "no prompt id supplied for correction call, synthesized a fallback"
                );
                Self {
                    prompt_id: fallback,
                }
            }
        }
    }

    fn synthesize() -> String {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0);
        let suffix = Uuid::new_v4().simple().to_string();
        format!("edit-repair-{}-{}", millis, &suffix[..8])
    }

    pub fn prompt_id(&self) -> &str {
        &self.prompt_id
    }
}
