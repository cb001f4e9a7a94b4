//! The projection from session state to [`ViewSpec`].

use gradeup_directory::UserDirectory;
use gradeup_session::{SessionState, ViewMode};

use crate::{
    AdminDashboard, AdminRow, CardView, Catalog, Gate, StudentDashboard, ViewSpec,
};

/// Derives the visible view from the session.
///
/// `render` is a pure function of its inputs: the same session and
/// roster always give the same [`ViewSpec`]. The controller only holds
/// the static card catalog.
#[derive(Debug, Clone, Default)]
pub struct ViewController {
    catalog: Catalog,
}

impl ViewController {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Computes the full view for `state`.
    ///
    /// - logged out → [`ViewSpec::Login`]
    /// - admin → [`ViewSpec::AdminDashboard`] with one row per roster
    ///   account (no rows if no roster is supplied)
    /// - student → [`ViewSpec::StudentDashboard`] gated on the premium flag
    pub fn render(&self, state: &SessionState, directory: Option<&UserDirectory>) -> ViewSpec {
        let view = match state.mode() {
            ViewMode::LoggedOut => ViewSpec::Login,
            ViewMode::Admin => ViewSpec::AdminDashboard(AdminDashboard {
                rows: directory
                    .map(|dir| dir.snapshot().into_iter().map(AdminRow::new).collect())
                    .unwrap_or_default(),
            }),
            ViewMode::Student => {
                ViewSpec::StudentDashboard(self.student_dashboard(state))
            }
        };
        tracing::debug!(active = %view.active(), "view rendered");
        view
    }

    fn student_dashboard(&self, state: &SessionState) -> StudentDashboard {
        let gate = Gate::for_premium(state.is_premium());
        let locked = gate.is_locked();

        StudentDashboard {
            name: state.username().to_string(),
            gate,
            upgrade_prompt_visible: locked,
            premium_resources_visible: !locked,
            account_badge_visible: !locked,
            cards: self
                .catalog
                .cards()
                .iter()
                .map(|card| CardView {
                    title: card.title.clone(),
                    premium: card.premium,
                    locked: card.premium && locked,
                })
                .collect(),
        }
    }
}
