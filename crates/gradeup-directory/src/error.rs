//! Error types for the directory.

use crate::AccountId;

/// Errors that can occur while managing the roster.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    /// No account has this id.
    #[error("account {0} not found")]
    NotFound(AccountId),
}
