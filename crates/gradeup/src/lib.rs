//! # GradeUp
//!
//! Client-side session and entitlement manager for the GradeUp study
//! front end.
//!
//! A single [`App`] owns the session, the admin roster, and the view
//! projection. Front ends feed it user actions (login, upgrade, logout,
//! toggle entitlement) and draw whatever [`ViewSpec`] it hands back.
//!
//! ## Quick Start
//!
//! ```rust
//! use gradeup::prelude::*;
//!
//! let mut app = AppBuilder::new()
//!     .admin_secret("s3cr3t")
//!     .build(MemoryStore::new());
//!
//! let view = app.login("alice", "x").unwrap();
//! assert_eq!(view.active(), ActiveView::StudentDashboard);
//! ```

mod app;
mod config;
mod error;
mod logging;
mod upgrade;

pub use app::{App, AppBuilder};
pub use config::AppConfig;
pub use error::GradeupError;
pub use logging::init_logging;
pub use upgrade::{
    Confirm, UPGRADE_PROMPT, UPGRADE_SUCCESS_NOTICE, UpgradeOutcome, UpgradeRequest,
};

pub mod prelude {
    pub use crate::{
        App, AppBuilder, AppConfig, Confirm, GradeupError, UpgradeOutcome, UpgradeRequest,
    };
    pub use gradeup_directory::{Account, AccountId, AccountStatus, UserDirectory};
    pub use gradeup_session::{
        Authenticator, LocalAuthenticator, LoginOutcome, Role, SessionState, ViewMode,
    };
    pub use gradeup_store::{FileStore, KeyValueStore, MemoryStore};
    pub use gradeup_view::{
        ActiveView, AdminDashboard, AdminRow, CardView, Catalog, ContentCard, Gate,
        StudentDashboard, ViewSpec,
    };
}

pub use gradeup_view::ViewSpec;
