//! The admin account roster for GradeUp.
//!
//! Only the administrator sees this roster. It is an in-memory list of
//! mock accounts, reseeded from a fixed table every time the admin view
//! is activated and never persisted. The only mutable field is each
//! account's premium flag.
//!
//! # Key types
//!
//! - [`UserDirectory`] — the roster and its one mutation
//! - [`Account`] — a roster entry
//! - [`AccountId`] — stable, unique account identifier

mod account;
mod directory;
mod error;

pub use account::{Account, AccountId, AccountStatus};
pub use directory::UserDirectory;
pub use error::DirectoryError;
