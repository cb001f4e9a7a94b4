//! The owning controller: one place where every user action lands.
//!
//! `App` holds the session, the admin roster, and the view projection.
//! Every action follows the same path:
//!
//! ```text
//! action ──→ mutate SessionState / UserDirectory ──→ save (session actions only) ──→ render
//! ```
//!
//! Actions run to completion one at a time (`&mut self`), so there is no
//! locking: the app is single-actor by construction.

use gradeup_directory::{AccountId, DirectoryError, UserDirectory};
use gradeup_session::{
    Authenticator, LocalAuthenticator, SessionError, SessionState, SessionStore, ViewMode,
};
use gradeup_store::{JsonCodec, KeyValueStore};
use gradeup_view::{Catalog, ViewController, ViewSpec};

use crate::upgrade::{Confirm, UPGRADE_SUCCESS_NOTICE, UpgradeOutcome, UpgradeRequest};
use crate::{AppConfig, GradeupError};

/// Builder for configuring an [`App`].
///
/// This is the entry point for every store type: the store is only
/// chosen at [`build`](Self::build), so the builder itself isn't generic.
///
/// # Example
///
/// ```rust
/// use gradeup::prelude::*;
///
/// let app = AppBuilder::new()
///     .admin_secret("hunter2")
///     .session_key("my_session")
///     .build(MemoryStore::new());
/// assert_eq!(app.view(), &ViewSpec::Login);
/// ```
pub struct AppBuilder {
    config: AppConfig,
    catalog: Catalog,
}

impl AppBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
            catalog: Catalog::default(),
        }
    }

    /// Replaces the whole configuration.
    pub fn config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the secret that unlocks the admin role.
    pub fn admin_secret(mut self, secret: &str) -> Self {
        self.config.admin_secret = secret.to_string();
        self
    }

    /// Sets the store slot the session is persisted under.
    pub fn session_key(mut self, key: &str) -> Self {
        self.config.session_key = key.to_string();
        self
    }

    /// Sets the study cards shown on the student dashboard.
    pub fn catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Builds the app over `store`, classifying logins with
    /// [`LocalAuthenticator`] and the configured admin secret.
    pub fn build<S: KeyValueStore>(self, store: S) -> App<S, LocalAuthenticator> {
        let auth = LocalAuthenticator::new(self.config.admin_secret.clone());
        self.build_with_auth(store, auth)
    }

    /// Builds the app with a custom [`Authenticator`].
    ///
    /// Restores the persisted session (an absent or unreadable record
    /// means logged out), seeds the roster if the restored session is the
    /// admin's, and renders the first view.
    pub fn build_with_auth<S: KeyValueStore, A: Authenticator>(
        self,
        store: S,
        auth: A,
    ) -> App<S, A> {
        let sessions = SessionStore::with_codec(store, JsonCodec, self.config.session_key.clone());
        let state = sessions.load().unwrap_or_default();
        let directory = seed_for(&state);

        tracing::info!(
            mode = %state.mode(),
            key = %sessions.key(),
            "gradeup app started"
        );

        let mut app = App {
            config: self.config,
            sessions,
            auth,
            state,
            directory,
            views: ViewController::new(self.catalog),
            view: ViewSpec::Login,
            generation: 0,
        };
        app.rerender();
        app
    }
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A fresh roster whenever the admin view is being activated.
fn seed_for(state: &SessionState) -> Option<UserDirectory> {
    (state.mode() == ViewMode::Admin).then(UserDirectory::seed)
}

/// The session and entitlement controller.
pub struct App<S: KeyValueStore, A: Authenticator = LocalAuthenticator> {
    config: AppConfig,
    sessions: SessionStore<S>,
    auth: A,
    state: SessionState,
    /// Present only while the admin is logged in.
    directory: Option<UserDirectory>,
    views: ViewController,
    view: ViewSpec,
    /// Bumped by every login and logout; upgrade requests are stamped with it.
    generation: u64,
}

impl<S: KeyValueStore, A: Authenticator> App<S, A> {
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// The current session.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// The admin roster, if the admin is logged in.
    pub fn directory(&self) -> Option<&UserDirectory> {
        self.directory.as_ref()
    }

    /// The view as of the last completed action.
    pub fn view(&self) -> &ViewSpec {
        &self.view
    }

    /// The persistence slot the session is written to.
    pub fn session_store(&self) -> &SessionStore<S> {
        &self.sessions
    }

    /// Handles a login submission.
    ///
    /// Both fields are trimmed, then classified. The resulting session
    /// always starts without premium. Logging in as the admin seeds a
    /// fresh roster; logging in as a student drops any roster.
    ///
    /// # Errors
    /// Returns an error only if the session can't be saved. The new
    /// session and view are in place either way.
    pub fn login(&mut self, username: &str, password: &str) -> Result<&ViewSpec, GradeupError> {
        let outcome = self.auth.classify(username.trim(), password.trim());
        self.state.apply(&outcome);
        self.directory = seed_for(&self.state);
        self.generation += 1;

        tracing::info!(
            username = %self.state.username(),
            role = %self.state.role(),
            "user logged in"
        );

        let saved = self.sessions.save(&self.state);
        self.rerender();
        saved?;
        Ok(&self.view)
    }

    /// First phase of the upgrade: checks that a student is logged in.
    ///
    /// # Errors
    /// - [`SessionError::NotLoggedIn`] — nobody is logged in
    /// - [`SessionError::NotStudent`] — the admin can't upgrade
    pub fn request_upgrade(&self) -> Result<UpgradeRequest, GradeupError> {
        match self.state.mode() {
            ViewMode::LoggedOut => Err(SessionError::NotLoggedIn.into()),
            ViewMode::Admin => Err(SessionError::NotStudent.into()),
            ViewMode::Student => Ok(UpgradeRequest {
                username: self.state.username().to_string(),
                generation: self.generation,
            }),
        }
    }

    /// Second phase of the upgrade: applies the user's answer.
    ///
    /// On `accepted`, grants premium, saves, and re-renders. Otherwise
    /// nothing changes.
    ///
    /// # Errors
    /// Returns [`SessionError::StaleUpgrade`] if anyone logged in or out
    /// since the request was made. The answer belonged to that earlier
    /// session, so it is not applied.
    pub fn resolve_upgrade(
        &mut self,
        request: UpgradeRequest,
        accepted: bool,
    ) -> Result<UpgradeOutcome, GradeupError> {
        if request.generation != self.generation || request.username != self.state.username() {
            tracing::warn!(username = %request.username, "discarding stale upgrade answer");
            return Err(SessionError::StaleUpgrade.into());
        }
        if !accepted {
            tracing::info!(username = %request.username, "upgrade declined");
            return Ok(UpgradeOutcome::Declined);
        }

        self.state.grant_premium()?;
        tracing::info!(username = %request.username, "student upgraded to premium");

        let saved = self.sessions.save(&self.state);
        self.rerender();
        saved?;
        Ok(UpgradeOutcome::Upgraded {
            notice: UPGRADE_SUCCESS_NOTICE,
        })
    }

    /// Runs the whole upgrade flow, asking `confirm` in between.
    pub async fn upgrade<C: Confirm>(
        &mut self,
        confirm: &mut C,
    ) -> Result<UpgradeOutcome, GradeupError> {
        let request = self.request_upgrade()?;
        let accepted = confirm.confirm(request.prompt()).await;
        self.resolve_upgrade(request, accepted)
    }

    /// Logs out whoever is logged in.
    ///
    /// Resets the session to the logged-out default, deletes the persisted
    /// record, and drops the roster. Safe to call when already logged out.
    pub fn logout(&mut self) -> Result<&ViewSpec, GradeupError> {
        if self.state.is_logged_in() {
            tracing::info!(username = %self.state.username(), "user logged out");
        }
        self.state.reset();
        self.directory = None;
        self.generation += 1;

        let cleared = self.sessions.clear();
        self.rerender();
        cleared?;
        Ok(&self.view)
    }

    /// Flips the premium flag of a roster account (admin only).
    ///
    /// Only the admin table changes; nothing is persisted. An id that
    /// isn't in the roster is logged and ignored.
    ///
    /// # Errors
    /// Returns [`SessionError::NotAdmin`] if the admin isn't logged in.
    pub fn toggle_entitlement(&mut self, id: AccountId) -> Result<&ViewSpec, GradeupError> {
        if self.state.mode() != ViewMode::Admin {
            return Err(SessionError::NotAdmin.into());
        }

        let directory = self.directory.get_or_insert_with(UserDirectory::seed);
        match directory.toggle_premium(id) {
            Ok(_) => self.rerender(),
            Err(DirectoryError::NotFound(id)) => {
                tracing::warn!(%id, "toggle ignored: account not in roster");
            }
        }
        Ok(&self.view)
    }

    fn rerender(&mut self) {
        self.view = self.views.render(&self.state, self.directory.as_ref());
    }
}
