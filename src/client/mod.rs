//! The external generation capability consumed by the invoker.
//!
//! The edit-repair crate does not implement a model client; it consumes one
//! through [`ModelClient`]. The capability accepts a structured generation
//! request and returns JSON that should conform to the supplied schema.
//! Implementations must honor the request's cancellation token promptly and
//! respect `max_attempts` over any default retry policy of their own.

use crate::types::Message;
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

/// One structured generation request.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// Ordered message contents.
    pub messages: Vec<Message>,
    /// System instruction paired with the messages.
    pub system: String,
    /// JSON schema the output must conform to.
    pub schema: serde_json::Value,
    /// Target model identifier.
    pub model: String,
    /// Correlation id for the call (the resolved prompt id).
    pub correlation_id: String,
    /// Cancellation token the client must observe while the call is in flight.
    pub cancel: CancellationToken,
    /// Maximum attempts the client may make. The invoker always sets 1,
    /// overriding any client-side retry default.
    pub max_attempts: u32,
}

/// Errors a model client may surface. The invoker normalizes all of them
/// to "no result", so the variants exist for logging, not for control flow
/// above the invoker.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("malformed response: {0}")]
    MalformedResponse(String),
    #[error("call was cancelled")]
    Cancelled,
}

/// An opaque capability that turns a [`GenerationRequest`] into parsed JSON.
#[async_trait]
pub trait ModelClient: Send + Sync {
    async fn generate(&self, request: GenerationRequest)
        -> Result<serde_json::Value, ClientError>;
}
