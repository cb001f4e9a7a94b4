//! Codec trait and implementations for turning records into bytes.
//!
//! Stores only deal in bytes. A [`Codec`] sits between a typed record and
//! the store so the representation can change without touching either
//! side.

use serde::{Serialize, de::DeserializeOwned};

use crate::StoreError;

/// Encodes values to bytes and decodes them back.
///
/// The methods are generic over the value type, so one codec serves every
/// record kind the application persists.
pub trait Codec: Send + Sync + 'static {
    /// Serializes a value into bytes.
    ///
    /// # Errors
    /// Returns `StoreError::Encode` if the value can't be represented.
    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, StoreError>;

    /// Deserializes bytes back into a value.
    ///
    /// # Errors
    /// Returns `StoreError::Decode` if the bytes are malformed or don't
    /// match the expected shape.
    fn decode<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T, StoreError>;
}

// ---------------------------------------------------------------------------
// JsonCodec
// ---------------------------------------------------------------------------

/// A [`Codec`] that uses JSON (via `serde_json`).
///
/// JSON keeps the persisted session readable: you can open the file the
/// [`FileStore`](crate::FileStore) writes and see exactly what the
/// application will restore on the next start.
///
/// ```rust
/// use gradeup_store::{Codec, JsonCodec};
///
/// let codec = JsonCodec;
/// let bytes = codec.encode(&vec![1u8, 2, 3]).unwrap();
/// let decoded: Vec<u8> = codec.decode(&bytes).unwrap();
/// assert_eq!(decoded, vec![1, 2, 3]);
/// ```
#[cfg(feature = "json")]
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

#[cfg(feature = "json")]
impl Codec for JsonCodec {
    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, StoreError> {
        serde_json::to_vec(value).map_err(StoreError::Encode)
    }

    fn decode<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T, StoreError> {
        serde_json::from_slice(data).map_err(StoreError::Decode)
    }
}
