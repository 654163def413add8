//! Timeout-bounded single attempt against the generation capability.
//!
//! Repair calls are a best-effort secondary path: the primary edit already
//! failed, so every failure mode here (timeout, cancellation, transport
//! error, schema violation) collapses into a `None` the orchestrator can
//! fall back from. Nothing at this layer ever propagates an error upward.

mod cancel;

pub use cancel::CompositeCancel;

use crate::client::{GenerationRequest, ModelClient};
use crate::prompt::ComposedPrompt;
use crate::structured::OutputValidator;
use crate::types::CorrectedEdit;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Default budget for one correction call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(40_000);

/// Executes exactly one generation attempt under a caller signal and an
/// internal timeout, merged by [`CompositeCancel`].
#[derive(Debug, Clone)]
pub struct Invoker {
    timeout: Duration,
}

impl Default for Invoker {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl Invoker {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Run one attempt. Returns the parsed correction, or `None` for any
    /// failure: caller cancellation, elapsed budget, client error, or output
    /// that does not conform to the schema.
    pub async fn invoke(
        &self,
        client: &dyn ModelClient,
        prompt: ComposedPrompt,
        schema: serde_json::Value,
        model: &str,
        correlation_id: &str,
        cancel: &CancellationToken,
    ) -> Option<CorrectedEdit> {
        // An already-fired caller signal never reaches the client.
        if cancel.is_cancelled() {
            tracing::debug!(correlation_id, "correction call cancelled before dispatch");
            return None;
        }

        let composite = CompositeCancel::new(cancel, self.timeout);
        let validator = OutputValidator::new(schema.clone());
        let request = GenerationRequest {
            messages: vec![prompt.user],
            system: prompt.system.to_string(),
            schema,
            model: model.to_string(),
            correlation_id: correlation_id.to_string(),
            cancel: composite.token(),
            // One attempt, overriding the client's own retry default.
            max_attempts: 1,
        };

        // Single observation point for the cancellation race.
        let raw = tokio::select! {
            _ = composite.cancelled() => {
                tracing::debug!(
                    correlation_id,
                    timeout_ms = self.timeout.as_millis() as u64,
                    "correction call cancelled or timed out"
                );
                return None;
            }
            result = client.generate(request) => match result {
                Ok(value) => value,
                Err(err) => {
                    tracing::debug!(correlation_id, error = %err, "correction call failed");
                    return None;
                }
            },
        };

        if let Err(errors) = validator.validate(&raw) {
            tracing::warn!(
                correlation_id,
                violations = errors.len(),
                first = %errors[0],
                "correction output failed schema validation"
            );
            return None;
        }

        match serde_json::from_value::<CorrectedEdit>(raw) {
            Ok(edit) => Some(edit),
            Err(err) => {
                tracing::warn!(correlation_id, error = %err, "correction output failed to deserialize");
                None
            }
        }
    }
}
