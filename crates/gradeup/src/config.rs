//! Application configuration.

use gradeup_session::SESSION_KEY;
use serde::{Deserialize, Serialize};

/// Settings for an [`App`](crate::App).
///
/// Create one with `AppConfig::default()` and override the fields you
/// care about, or go through [`AppBuilder`](crate::AppBuilder).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// The password that, together with the `admin` username, selects the
    /// admin role. Held in process memory only.
    pub admin_secret: String,

    /// The store slot the session record is written to.
    pub session_key: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            admin_secret: "s3cr3t".to_string(),
            session_key: SESSION_KEY.to_string(),
        }
    }
}
