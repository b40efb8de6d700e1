//! Configuration document parsing.
//!
//! JSON and YAML inputs are both parsed into a `serde_json::Value` tree so
//! that schema validation and typed decoding see one representation.

mod document;

pub use document::*;
