//! Strict JSON encoding and decoding.
//!
//! Unlike dictionary parsing, decoding fails on malformed input: a value of
//! the wrong type anywhere in the document is a [`CoreError::Decode`]. Missing
//! keys still take their defaults.

use crate::dao::Dao;
use crate::errors::CoreError;

/// Compact JSON bytes.
pub fn encode<T: Dao>(value: &T) -> Result<Vec<u8>, CoreError> {
    serde_json::to_vec(value).map_err(|source| CoreError::Encode {
        kind: T::KIND,
        source,
    })
}

/// Indented JSON text.
pub fn encode_pretty<T: Dao>(value: &T) -> Result<String, CoreError> {
    serde_json::to_string_pretty(value).map_err(|source| CoreError::Encode {
        kind: T::KIND,
        source,
    })
}

pub fn decode<T: Dao>(bytes: &[u8]) -> Result<T, CoreError> {
    serde_json::from_slice(bytes).map_err(|source| CoreError::Decode {
        kind: T::KIND,
        source,
    })
}

/// Decode from an already-parsed JSON value.
pub fn decode_value<T: Dao>(value: serde_json::Value) -> Result<T, CoreError> {
    serde_json::from_value(value).map_err(|source| CoreError::Decode {
        kind: T::KIND,
        source,
    })
}
