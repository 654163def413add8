//! Core type definitions for the edit-repair pipeline.

pub mod correction;
pub mod message;
pub mod request;

pub use correction::CorrectedEdit;
pub use message::{Message, MessageRole};
pub use request::EditRequest;
