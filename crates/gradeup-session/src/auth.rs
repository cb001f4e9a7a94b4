//! Login classification.
//!
//! GradeUp has no server, so there is nothing to verify a password
//! against. A submitted `(username, password)` pair is only *classified*:
//! the literal `admin` user with the locally held secret becomes the
//! administrator, everyone else becomes a student. This is a policy, not
//! a security boundary, and it never fails.

use crate::Role;

/// Username (compared case-insensitively, after trimming) that selects the
/// admin role.
pub const ADMIN_USERNAME: &str = "admin";

/// Display name every admin session gets.
pub const ADMIN_DISPLAY_NAME: &str = "Admin";

/// Display name for a student who submitted a blank username.
pub const DEFAULT_STUDENT_NAME: &str = "Student";

/// The result of classifying a login submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// The admin username with the matching secret.
    Admin,

    /// Anyone else.
    Student { display_name: String },
}

impl LoginOutcome {
    pub fn role(&self) -> Role {
        match self {
            Self::Admin => Role::Admin,
            Self::Student { .. } => Role::Student,
        }
    }

    /// The name the dashboard greets the user with.
    pub fn display_name(&self) -> &str {
        match self {
            Self::Admin => ADMIN_DISPLAY_NAME,
            Self::Student { display_name } => display_name,
        }
    }
}

/// Classifies a login submission against the admin secret.
///
/// - trimmed `username` equal to `admin` (any case) AND `password` exactly
///   equal to `admin_secret` → [`LoginOutcome::Admin`]
/// - otherwise → [`LoginOutcome::Student`] named after the trimmed
///   username, or `"Student"` when that is empty
///
/// ```rust
/// use gradeup_session::{LoginOutcome, classify};
///
/// assert_eq!(classify(" Admin ", "s3cr3t", "s3cr3t"), LoginOutcome::Admin);
/// assert_eq!(
///     classify("admin", "wrong", "s3cr3t"),
///     LoginOutcome::Student { display_name: "admin".into() },
/// );
/// ```
pub fn classify(username: &str, password: &str, admin_secret: &str) -> LoginOutcome {
    let username = username.trim();

    if username.to_lowercase() == ADMIN_USERNAME && password == admin_secret {
        return LoginOutcome::Admin;
    }

    let display_name = if username.is_empty() {
        DEFAULT_STUDENT_NAME
    } else {
        username
    };
    LoginOutcome::Student {
        display_name: display_name.to_string(),
    }
}

/// Decides which role a login submission gets.
///
/// This is the seam the controller depends on, so tests (or a future
/// remote check) can swap in a different policy.
///
/// # Example
///
/// ```rust
/// use gradeup_session::{Authenticator, LoginOutcome};
///
/// /// Everybody is a student called "guest".
/// struct GuestOnly;
///
/// impl Authenticator for GuestOnly {
///     fn classify(&self, _username: &str, _password: &str) -> LoginOutcome {
///         LoginOutcome::Student { display_name: "guest".into() }
///     }
/// }
/// ```
pub trait Authenticator: Send + Sync + 'static {
    /// Classifies the submitted credentials. Never fails.
    fn classify(&self, username: &str, password: &str) -> LoginOutcome;
}

/// The default [`Authenticator`]: [`classify`] against a secret held in
/// process memory.
#[derive(Debug, Clone)]
pub struct LocalAuthenticator {
    admin_secret: String,
}

impl LocalAuthenticator {
    pub fn new(admin_secret: impl Into<String>) -> Self {
        Self {
            admin_secret: admin_secret.into(),
        }
    }
}

impl Authenticator for LocalAuthenticator {
    fn classify(&self, username: &str, password: &str) -> LoginOutcome {
        classify(username, password, &self.admin_secret)
    }
}
