//! The output of a render: which view is active and what it shows.

use std::fmt;

use gradeup_directory::Account;
use serde::Serialize;

// ---------------------------------------------------------------------------
// Gate
// ---------------------------------------------------------------------------

/// Whether premium content is available to the current student.
///
/// Each gated affordance follows from the gate alone:
///
/// | affordance              | `Locked` | `Unlocked` |
/// |-------------------------|----------|------------|
/// | upgrade prompt          | shown    | hidden     |
/// | premium resource list   | hidden   | shown      |
/// | account-type badge      | hidden   | shown      |
/// | premium cards           | locked   | open       |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Gate {
    Locked,
    Unlocked,
}

impl Gate {
    pub fn for_premium(is_premium: bool) -> Self {
        if is_premium { Self::Unlocked } else { Self::Locked }
    }

    pub fn is_locked(self) -> bool {
        matches!(self, Self::Locked)
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Locked => write!(f, "Locked"),
            Self::Unlocked => write!(f, "Unlocked"),
        }
    }
}

// ---------------------------------------------------------------------------
// Student dashboard
// ---------------------------------------------------------------------------

/// A study card as it should be displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardView {
    pub title: String,
    pub premium: bool,
    /// Shown in the disabled/locked affordance.
    pub locked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudentDashboard {
    /// The greeting name.
    pub name: String,
    pub gate: Gate,
    pub upgrade_prompt_visible: bool,
    pub premium_resources_visible: bool,
    pub account_badge_visible: bool,
    pub cards: Vec<CardView>,
}

// ---------------------------------------------------------------------------
// Admin dashboard
// ---------------------------------------------------------------------------

/// One row of the admin account table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminRow {
    pub account: Account,
    /// `Active` or `Inactive`.
    pub status_label: &'static str,
    /// `Yes` or `No`.
    pub premium_label: &'static str,
    /// What the toggle button does next.
    pub action_label: &'static str,
}

impl AdminRow {
    pub fn new(account: Account) -> Self {
        let (premium_label, action_label) = if account.is_premium {
            ("Yes", "Remove Premium")
        } else {
            ("No", "Grant Premium")
        };
        Self {
            status_label: account.status.label(),
            premium_label,
            action_label,
            account,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminDashboard {
    pub rows: Vec<AdminRow>,
}

// ---------------------------------------------------------------------------
// ViewSpec
// ---------------------------------------------------------------------------

/// Which of the three views is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ActiveView {
    Login,
    StudentDashboard,
    AdminDashboard,
}

impl fmt::Display for ActiveView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Login => write!(f, "Login"),
            Self::StudentDashboard => write!(f, "StudentDashboard"),
            Self::AdminDashboard => write!(f, "AdminDashboard"),
        }
    }
}

/// Everything a front end needs to draw the current screen.
///
/// Being an enum, exactly one view is active by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "active")]
pub enum ViewSpec {
    Login,
    StudentDashboard(StudentDashboard),
    AdminDashboard(AdminDashboard),
}

impl ViewSpec {
    pub fn active(&self) -> ActiveView {
        match self {
            Self::Login => ActiveView::Login,
            Self::StudentDashboard(_) => ActiveView::StudentDashboard,
            Self::AdminDashboard(_) => ActiveView::AdminDashboard,
        }
    }

    pub fn as_student(&self) -> Option<&StudentDashboard> {
        match self {
            Self::StudentDashboard(dash) => Some(dash),
            _ => None,
        }
    }

    pub fn as_admin(&self) -> Option<&AdminDashboard> {
        match self {
            Self::AdminDashboard(dash) => Some(dash),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gradeup_directory::AccountStatus;

    #[test]
    fn test_gate_for_premium() {
        assert_eq!(Gate::for_premium(true), Gate::Unlocked);
        assert_eq!(Gate::for_premium(false), Gate::Locked);
        assert!(Gate::Locked.is_locked());
        assert!(!Gate::Unlocked.is_locked());
    }

    #[test]
    fn test_admin_row_labels_for_premium_account() {
        let row = AdminRow::new(Account::new(1, "john_doe", AccountStatus::Active, true));
        assert_eq!(row.status_label, "Active");
        assert_eq!(row.premium_label, "Yes");
        assert_eq!(row.action_label, "Remove Premium");
    }

    #[test]
    fn test_admin_row_labels_for_free_inactive_account() {
        let row = AdminRow::new(Account::new(5, "amit_patel", AccountStatus::Inactive, false));
        assert_eq!(row.status_label, "Inactive");
        assert_eq!(row.premium_label, "No");
        assert_eq!(row.action_label, "Grant Premium");
    }

    #[test]
    fn test_view_spec_serializes_with_active_tag() {
        let json = serde_json::to_string(&ViewSpec::Login).unwrap();
        assert_eq!(json, r#"{"active":"Login"}"#);
    }
}
