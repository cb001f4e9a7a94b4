//! Saving and restoring the session through a key-value slot.

use gradeup_store::{Codec, JsonCodec, KeyValueStore};

use crate::{SessionError, SessionState};

/// The slot the session record lives in. There is no version suffix: a
/// record in an older shape simply fails to decode and reads as "absent".
pub const SESSION_KEY: &str = "gradeup_user_session";

/// Persists a [`SessionState`] under one fixed key.
///
/// Every operation reads or overwrites that single slot. There is no
/// merging; the last `save` wins.
pub struct SessionStore<S: KeyValueStore, C: Codec = JsonCodec> {
    store: S,
    codec: C,
    key: String,
}

impl<S: KeyValueStore> SessionStore<S, JsonCodec> {
    /// Creates a session store writing JSON under [`SESSION_KEY`].
    pub fn new(store: S) -> Self {
        Self::with_codec(store, JsonCodec, SESSION_KEY)
    }
}

impl<S: KeyValueStore, C: Codec> SessionStore<S, C> {
    /// Creates a session store with an explicit codec and key.
    pub fn with_codec(store: S, codec: C, key: impl Into<String>) -> Self {
        Self {
            store,
            codec,
            key: key.into(),
        }
    }

    /// The key this store reads and writes.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Borrows the underlying key-value store.
    pub fn inner(&self) -> &S {
        &self.store
    }

    /// Reads the persisted session.
    ///
    /// Returns `None` when nothing is stored, and also when the stored
    /// bytes can't be read, don't parse, or describe an impossible
    /// session. Those cases are logged and otherwise swallowed: the
    /// caller's fallback is always the logged-out default.
    pub fn load(&self) -> Option<SessionState> {
        let bytes = match self.store.get(&self.key) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => {
                tracing::debug!(key = %self.key, "no persisted session");
                return None;
            }
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "failed to read persisted session");
                return None;
            }
        };

        match self.codec.decode::<SessionState>(&bytes) {
            Ok(state) => {
                tracing::debug!(
                    key = %self.key,
                    mode = %state.mode(),
                    "persisted session restored"
                );
                Some(state)
            }
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "discarding unreadable session record");
                None
            }
        }
    }

    /// Overwrites the persisted session with `state`.
    pub fn save(&mut self, state: &SessionState) -> Result<(), SessionError> {
        let bytes = self.codec.encode(state)?;
        self.store.set(&self.key, &bytes)?;
        tracing::debug!(key = %self.key, mode = %state.mode(), "session saved");
        Ok(())
    }

    /// Deletes the persisted session. Clearing an absent record is fine.
    pub fn clear(&mut self) -> Result<(), SessionError> {
        self.store.remove(&self.key)?;
        tracing::debug!(key = %self.key, "session cleared");
        Ok(())
    }
}
