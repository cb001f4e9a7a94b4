//! Session types: the validated record of the current user.
//!
//! A session answers three questions:
//! - IS anybody logged in?
//! - WHO are they (display name) and in WHICH role?
//! - ARE they entitled to premium content?
//!
//! The fields are private. The only ways to change a session are the
//! transitions below, each of which keeps the invariants:
//!
//! - logged out ⇒ empty username, no premium flag, default `Student` role
//! - admin ⇒ no premium flag

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{LoginOutcome, SessionError};

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// Which dashboard and capabilities apply to a logged-in user.
///
/// Logged-out sessions carry the default, `Student`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Student,
    Admin,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Student => write!(f, "student"),
            Self::Admin => write!(f, "admin"),
        }
    }
}

// ---------------------------------------------------------------------------
// ViewMode
// ---------------------------------------------------------------------------

/// The exclusive three-way partition of sessions.
///
/// Exactly one mode holds at any time and it is fully determined by
/// `(is_logged_in, role)`:
///
/// ```text
///   LoggedOut ──(login as student)──→ Student ──(logout)──→ LoggedOut
///       │                                                      ↑
///       └──────(login as admin)──→ Admin ──────(logout)────────┘
/// ```
///
/// There is no edge between `Student` and `Admin`; switching requires a
/// logout and a fresh login.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewMode {
    LoggedOut,
    Student,
    Admin,
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LoggedOut => write!(f, "LoggedOut"),
            Self::Student => write!(f, "Student"),
            Self::Admin => write!(f, "Admin"),
        }
    }
}

// ---------------------------------------------------------------------------
// SessionState
// ---------------------------------------------------------------------------

/// The current user's session.
///
/// Serializes to the record the front end keeps in its durable slot:
///
/// ```json
/// {"isLoggedIn":true,"username":"alice","userRole":"student","isPremium":false}
/// ```
///
/// Deserializing goes through the same validation as the transitions, so
/// a record describing an impossible session is rejected rather than
/// restored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SessionRecord", into = "SessionRecord")]
pub struct SessionState {
    is_logged_in: bool,
    username: String,
    role: Role,
    is_premium: bool,
}

impl SessionState {
    /// The logged-out default every process starts from.
    pub fn logged_out() -> Self {
        Self::default()
    }

    /// A logged-in student session.
    pub fn student(username: impl Into<String>, is_premium: bool) -> Self {
        Self {
            is_logged_in: true,
            username: username.into(),
            role: Role::Student,
            is_premium,
        }
    }

    /// A logged-in admin session. Admins never hold the premium flag.
    pub fn admin(username: impl Into<String>) -> Self {
        Self {
            is_logged_in: true,
            username: username.into(),
            role: Role::Admin,
            is_premium: false,
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.is_logged_in
    }

    /// Display name; empty when logged out.
    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn is_premium(&self) -> bool {
        self.is_premium
    }

    /// Which of the three exclusive modes this session is in.
    pub fn mode(&self) -> ViewMode {
        match (self.is_logged_in, self.role) {
            (false, _) => ViewMode::LoggedOut,
            (true, Role::Student) => ViewMode::Student,
            (true, Role::Admin) => ViewMode::Admin,
        }
    }

    /// Logs the user in according to a classification outcome.
    ///
    /// Replaces whatever session was there before. The premium flag is
    /// always cleared: a fresh login starts without entitlement, even for
    /// a student who was premium last time.
    pub fn apply(&mut self, outcome: &LoginOutcome) {
        *self = Self {
            is_logged_in: true,
            username: outcome.display_name().to_string(),
            role: outcome.role(),
            is_premium: false,
        };
    }

    /// Grants premium entitlement to the logged-in student.
    ///
    /// # Errors
    /// - [`SessionError::NotLoggedIn`] — nobody is logged in
    /// - [`SessionError::NotStudent`] — the admin can't hold premium
    pub fn grant_premium(&mut self) -> Result<(), SessionError> {
        match self.mode() {
            ViewMode::LoggedOut => Err(SessionError::NotLoggedIn),
            ViewMode::Admin => Err(SessionError::NotStudent),
            ViewMode::Student => {
                self.is_premium = true;
                Ok(())
            }
        }
    }

    /// Drops back to the logged-out default.
    pub fn reset(&mut self) {
        *self = Self::logged_out();
    }

    fn check_invariants(&self) -> Result<(), SessionError> {
        if !self.is_logged_in && !self.username.is_empty() {
            return Err(SessionError::InvalidRecord(
                "logged-out session carries a username".into(),
            ));
        }
        if !self.is_logged_in && self.is_premium {
            return Err(SessionError::InvalidRecord(
                "logged-out session carries premium".into(),
            ));
        }
        if !self.is_logged_in && self.role == Role::Admin {
            return Err(SessionError::InvalidRecord(
                "logged-out session carries the admin role".into(),
            ));
        }
        if self.role == Role::Admin && self.is_premium {
            return Err(SessionError::InvalidRecord(
                "admin session carries premium".into(),
            ));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Persisted record
// ---------------------------------------------------------------------------

/// The on-disk field layout. Kept separate from [`SessionState`] so the
/// wire names can't leak into the Rust API.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SessionRecord {
    is_logged_in: bool,
    username: String,
    user_role: Role,
    is_premium: bool,
}

impl From<SessionState> for SessionRecord {
    fn from(state: SessionState) -> Self {
        Self {
            is_logged_in: state.is_logged_in,
            username: state.username,
            user_role: state.role,
            is_premium: state.is_premium,
        }
    }
}

impl TryFrom<SessionRecord> for SessionState {
    type Error = SessionError;

    fn try_from(record: SessionRecord) -> Result<Self, Self::Error> {
        let state = Self {
            is_logged_in: record.is_logged_in,
            username: record.username,
            role: record.user_role,
            is_premium: record.is_premium,
        };
        state.check_invariants()?;
        Ok(state)
    }
}
