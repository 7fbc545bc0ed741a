//! Cross-cutting error types for the data-object crates.
//!
//! Dictionary parsing never fails: malformed fields fall back to defaults and an
//! empty dictionary yields `None`. The errors below cover the strict paths
//! (JSON byte decoding, kind lookup) where the caller needs to know what broke.

use thiserror::Error;

/// Errors that can be raised by `dao-core`.
#[derive(Debug, Error)]
pub enum CoreError {
    /// JSON bytes could not be decoded into the requested entity.
    #[error("Decode error for {kind}: {source}")]
    Decode {
        kind: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// An entity could not be encoded to JSON.
    #[error("Encode error for {kind}: {source}")]
    Encode {
        kind: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// The requested entity kind name is not registered.
    #[error("Unknown entity kind: {0}")]
    UnknownKind(String),
}
