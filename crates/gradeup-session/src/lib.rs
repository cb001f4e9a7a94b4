//! User session management for GradeUp.
//!
//! This crate owns everything about "who is using the app right now":
//!
//! 1. **Classification** — turning a submitted username/password into a
//!    role ([`Authenticator`] trait, [`classify`])
//! 2. **Session state** — the validated in-memory record of the current
//!    user ([`SessionState`])
//! 3. **Persistence** — saving and restoring that record through a
//!    key-value slot ([`SessionStore`])
//!
//! # How it fits in the stack
//!
//! ```text
//! Controller (above)  ← drives logins, upgrades, logouts
//!     ↕
//! Session layer (this crate)  ← enforces the session invariants
//!     ↕
//! Store layer (below)  ← provides KeyValueStore, Codec
//! ```

mod auth;
mod error;
mod session;
mod store;

pub use auth::{
    ADMIN_DISPLAY_NAME, ADMIN_USERNAME, Authenticator, DEFAULT_STUDENT_NAME,
    LocalAuthenticator, LoginOutcome, classify,
};
pub use error::SessionError;
pub use session::{Role, SessionState, ViewMode};
pub use store::{SESSION_KEY, SessionStore};
