//! Durable key-value persistence for GradeUp.
//!
//! The front end keeps exactly one durable record (the user session), but
//! the layer underneath it is a plain key-value slot store so it can be
//! backed by memory in tests and by files on disk in the CLI.
//!
//! - **Stores** ([`KeyValueStore`] trait, [`MemoryStore`], [`FileStore`]) —
//!   where bytes live.
//! - **Codec** ([`Codec`] trait, [`JsonCodec`]) — how records become bytes.
//! - **Errors** ([`StoreError`]) — what can go wrong reading or writing.
//!
//! ```text
//! Session layer (above)  ← decides WHAT to persist
//!     ↕
//! Store layer (this crate)  ← decides WHERE and HOW it is written
//! ```

mod codec;
mod error;
mod file;
mod memory;

pub use codec::Codec;
#[cfg(feature = "json")]
pub use codec::JsonCodec;
pub use error::StoreError;
pub use file::FileStore;
pub use memory::MemoryStore;

/// A store of named byte slots.
///
/// Every operation touches a single key. There is no transactionality
/// beyond "the last write to a key wins".
///
/// # Trait bounds
///
/// - `Send + 'static` → a store can be moved into a long-lived controller
///   (or a Tokio task) without borrowing anything temporary.
pub trait KeyValueStore: Send + 'static {
    /// Reads the bytes stored under `key`.
    ///
    /// Returns `Ok(None)` when nothing has been written to the key.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Writes `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &[u8]) -> Result<(), StoreError>;

    /// Deletes the value stored under `key`.
    ///
    /// Removing a key that holds nothing is not an error.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// Returns `true` if `key` is safe to use as a slot name on every backend.
///
/// Keys are limited to ASCII letters, digits, `_` and `-` so the file
/// backend can map them straight onto file names.
pub fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}
