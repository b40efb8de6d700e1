//! Schema validation adapters.

mod json_schema;

pub use json_schema::JsonSchemaValidator;
