//! # dao-schema
//!
//! JSON Schema generation and validation for data objects.
//!
//! This crate provides:
//! - `SchemaRegistry`: every entity kind plus the embedded value types
//! - Validation of canonical dictionaries and typed entities
//! - Schema export for external tooling (`dao schema` command)
//!
//! ## Architecture
//!
//! Entity types are defined in `dao-core` with `#[derive(JsonSchema)]`.
//! This crate owns the lookup and validation layer so `dao-core` stays free of
//! the `jsonschema` dependency.

pub mod error;
pub mod registry;

pub use error::SchemaError;
pub use registry::SchemaRegistry;
