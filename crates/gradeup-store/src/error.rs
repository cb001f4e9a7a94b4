//! Error types for the store layer.

/// Errors that can occur while reading or writing a slot.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The key contains characters no backend can represent.
    #[error("invalid store key: {0:?}")]
    InvalidKey(String),

    /// Reading or writing the backing medium failed.
    #[error("store i/o failed for key {key}: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// Serialization failed (turning a Rust value into bytes).
    #[cfg(feature = "json")]
    #[error("encode failed: {0}")]
    Encode(serde_json::Error),

    /// Deserialization failed (turning bytes back into a Rust value).
    ///
    /// Common causes: a record written by an older build with a
    /// different shape, a truncated file, or bytes that were never JSON.
    #[cfg(feature = "json")]
    #[error("decode failed: {0}")]
    Decode(serde_json::Error),
}
