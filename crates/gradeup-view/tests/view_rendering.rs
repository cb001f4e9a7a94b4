//! Integration tests for the session → view projection.

use gradeup_directory::{AccountId, UserDirectory};
use gradeup_session::{SessionState, ViewMode};
use gradeup_view::{ActiveView, Catalog, ContentCard, Gate, ViewController, ViewSpec};

// =========================================================================
// Helpers
// =========================================================================

fn controller() -> ViewController {
    ViewController::default()
}

fn all_states() -> Vec<SessionState> {
    vec![
        SessionState::logged_out(),
        SessionState::student("alice", false),
        SessionState::student("alice", true),
        SessionState::admin("Admin"),
    ]
}

// =========================================================================
// Active view
// =========================================================================

#[test]
fn test_logged_out_renders_login() {
    let view = controller().render(&SessionState::logged_out(), None);
    assert_eq!(view, ViewSpec::Login);
}

#[test]
fn test_active_view_follows_session_mode() {
    let dir = UserDirectory::seed();
    for state in all_states() {
        let view = controller().render(&state, Some(&dir));
        let expected = match state.mode() {
            ViewMode::LoggedOut => ActiveView::Login,
            ViewMode::Student => ActiveView::StudentDashboard,
            ViewMode::Admin => ActiveView::AdminDashboard,
        };
        assert_eq!(view.active(), expected, "state {state:?}");
    }
}

#[test]
fn test_student_view_ignores_directory() {
    let state = SessionState::student("alice", false);
    let with = controller().render(&state, Some(&UserDirectory::seed()));
    let without = controller().render(&state, None);
    assert_eq!(with, without);
}

// =========================================================================
// Student gating
// =========================================================================

#[test]
fn test_gate_matches_premium_flag_for_both_values() {
    for premium in [false, true] {
        let view = controller().render(&SessionState::student("alice", premium), None);
        let dash = view.as_student().expect("student dashboard");

        let expected = if premium { Gate::Unlocked } else { Gate::Locked };
        assert_eq!(dash.gate, expected);
        assert_eq!(dash.upgrade_prompt_visible, !premium);
        assert_eq!(dash.premium_resources_visible, premium);
        assert_eq!(dash.account_badge_visible, premium);
    }
}

#[test]
fn test_locked_gate_locks_only_premium_cards() {
    let view = controller().render(&SessionState::student("alice", false), None);
    let dash = view.as_student().unwrap();

    assert!(!dash.cards.is_empty());
    for card in &dash.cards {
        assert_eq!(card.locked, card.premium, "card {}", card.title);
    }
}

#[test]
fn test_unlocked_gate_opens_every_card() {
    let view = controller().render(&SessionState::student("alice", true), None);
    let dash = view.as_student().unwrap();

    assert!(dash.cards.iter().all(|c| !c.locked));
}

#[test]
fn test_student_dashboard_greets_by_name() {
    let view = controller().render(&SessionState::student("alice", false), None);
    assert_eq!(view.as_student().unwrap().name, "alice");
}

#[test]
fn test_custom_catalog_is_rendered_in_order() {
    let vc = ViewController::new(Catalog::new(vec![
        ContentCard::premium("B"),
        ContentCard::free("A"),
    ]));
    let view = vc.render(&SessionState::student("x", false), None);
    let titles: Vec<&str> = view
        .as_student()
        .unwrap()
        .cards
        .iter()
        .map(|c| c.title.as_str())
        .collect();
    assert_eq!(titles, vec!["B", "A"]);
}

// =========================================================================
// Admin dashboard
// =========================================================================

#[test]
fn test_admin_rows_mirror_directory() {
    let dir = UserDirectory::seed();
    let view = controller().render(&SessionState::admin("Admin"), Some(&dir));
    let rows = &view.as_admin().expect("admin dashboard").rows;

    let accounts: Vec<_> = rows.iter().map(|r| r.account.clone()).collect();
    assert_eq!(accounts, dir.snapshot());
}

#[test]
fn test_admin_rows_reflect_toggle() {
    let mut dir = UserDirectory::seed();
    dir.toggle_premium(AccountId(2)).unwrap();

    let view = controller().render(&SessionState::admin("Admin"), Some(&dir));
    let row = &view.as_admin().unwrap().rows[1];

    assert_eq!(row.account.id, AccountId(2));
    assert_eq!(row.premium_label, "Yes");
    assert_eq!(row.action_label, "Remove Premium");
}

#[test]
fn test_admin_without_directory_has_no_rows() {
    let view = controller().render(&SessionState::admin("Admin"), None);
    assert!(view.as_admin().unwrap().rows.is_empty());
}
