//! Structured output support for the correction call.
//!
//! The model is constrained to an object schema (required `search`,
//! `replace`, `explanation`; optional `noChangesRequired`), and its raw
//! output is validated against that schema before deserialization.

pub mod schema;
pub mod validator;

pub use schema::{corrected_edit_schema, SchemaGenerator};
pub use validator::{OutputValidator, ValidationError};
