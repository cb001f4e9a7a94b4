//! Error types for the session layer.

use gradeup_store::StoreError;

/// Errors that can occur while changing or persisting a session.
///
/// None of these are fatal: the application can always fall back to the
/// logged-out state.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The action needs a logged-in user and nobody is logged in.
    #[error("no user is logged in")]
    NotLoggedIn,

    /// The action is only available to students (e.g. upgrading).
    #[error("action requires a student session")]
    NotStudent,

    /// The action is only available to the administrator.
    #[error("action requires an admin session")]
    NotAdmin,

    /// An upgrade answer arrived after the session it was asked in ended.
    #[error("upgrade request belongs to an earlier session")]
    StaleUpgrade,

    /// A persisted record parsed but describes an impossible session,
    /// such as a logged-out user who still has a username.
    #[error("invalid session record: {0}")]
    InvalidRecord(String),

    /// The underlying store failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}
