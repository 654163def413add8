//! # edit-repair
//!
//! LLM-assisted repair for failed search/replace edits.
//!
//! When a search/replace edit fails to apply to a file (the search text no
//! longer matches, or matches ambiguously), this crate asks a language model
//! for a corrected pair, bounded by a timeout, and memoizes the result so an
//! identical repair request is never recomputed or re-billed.
//!
//! ## Core Philosophy
//!
//! - **Best-effort**: repair is a secondary path after a primary edit already
//!   failed. Every model-side failure collapses to `None`; the caller falls
//!   back to surfacing the original edit error.
//! - **Content-addressed**: a correction is keyed purely by the request's
//!   content. Identical requests hit the cache; no hidden state enters the key.
//! - **One attempt**: the invoker makes exactly one model call per miss,
//!   raced against the caller's cancellation signal and a fixed timeout.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use edit_repair::{CorrectionConfig, EditCorrectionService, EditRequest};
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn run(client: impl edit_repair::ModelClient) -> edit_repair::Result<()> {
//! let service = EditCorrectionService::new(CorrectionConfig::default())?;
//!
//! let request = EditRequest::new(
//!     "rename the function",
//!     "fn old_name(",
//!     "fn new_name(",
//!     "search text not found",
//!     "fn old() {}\n",
//! );
//!
//! let cancel = CancellationToken::new();
//! match service.correct_edit(&request, &client, Some("prompt-1"), &cancel).await {
//!     Some(edit) => println!("corrected search: {}", edit.search),
//!     None => println!("no correction available"),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`types`] | Request and correction types, prompt messages |
//! | [`cache`] | Content-digest keys and the bounded LRU store |
//! | [`prompt`] | System prompt and user-prompt template composition |
//! | [`structured`] | Correction schema and output validation |
//! | [`client`] | The consumed model-client capability |
//! | [`invoke`] | Composite cancellation and the timeout-bounded attempt |
//! | [`context`] | Explicit correlation context with fallback ids |
//! | [`service`] | The orchestrating [`EditCorrectionService`] |

pub mod cache;
pub mod client;
pub mod context;
pub mod invoke;
pub mod prompt;
pub mod service;
pub mod structured;
pub mod types;

// Re-export main types for convenience
pub use client::{ClientError, GenerationRequest, ModelClient};
pub use context::RequestContext;
pub use invoke::{CompositeCancel, Invoker, DEFAULT_TIMEOUT};
pub use service::{CorrectionConfig, EditCorrectionService, DEFAULT_CACHE_CAPACITY, DEFAULT_MODEL};
pub use types::{CorrectedEdit, EditRequest, Message, MessageRole};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
