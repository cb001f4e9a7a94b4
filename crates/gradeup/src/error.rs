//! Unified error type for GradeUp.

use gradeup_directory::DirectoryError;
use gradeup_session::SessionError;
use gradeup_store::StoreError;

/// Top-level error that wraps all crate-specific errors.
///
/// The `#[from]` attribute on each variant generates the `From` impl,
/// so `?` converts sub-crate errors automatically.
#[derive(Debug, thiserror::Error)]
pub enum GradeupError {
    /// A store-level error (i/o, encode, decode).
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A session-level error (wrong role, failed save).
    #[error(transparent)]
    Session(#[from] SessionError),

    /// A roster error (unknown account).
    #[error(transparent)]
    Directory(#[from] DirectoryError),

    /// The logging subscriber couldn't be installed.
    #[error("logging setup failed: {0}")]
    Logging(String),
}
