//! Integration tests for persisting sessions through a key-value slot.

use gradeup_session::{SESSION_KEY, SessionState, SessionStore};
use gradeup_store::{KeyValueStore, MemoryStore};

// =========================================================================
// Helpers
// =========================================================================

/// Every shape a valid session can take.
fn all_valid_states() -> Vec<SessionState> {
    vec![
        SessionState::logged_out(),
        SessionState::student("alice", false),
        SessionState::student("alice", true),
        SessionState::student("Student", false),
        SessionState::student("zoë ünïcode", true),
        SessionState::admin("Admin"),
    ]
}

fn store_with_raw(raw: &[u8]) -> SessionStore<MemoryStore> {
    let mut kv = MemoryStore::new();
    kv.set(SESSION_KEY, raw).unwrap();
    SessionStore::new(kv)
}

// =========================================================================
// Round trip
// =========================================================================

#[test]
fn test_save_then_load_round_trips_every_valid_state() {
    for state in all_valid_states() {
        let mut store = SessionStore::new(MemoryStore::new());
        store.save(&state).unwrap();
        assert_eq!(store.load(), Some(state.clone()), "round trip of {state:?}");
    }
}

#[test]
fn test_save_overwrites_previous_record() {
    let mut store = SessionStore::new(MemoryStore::new());
    store.save(&SessionState::student("alice", true)).unwrap();
    store.save(&SessionState::admin("Admin")).unwrap();

    assert_eq!(store.load(), Some(SessionState::admin("Admin")));
    assert_eq!(store.inner().len(), 1);
}

#[test]
fn test_save_writes_under_fixed_key() {
    let mut store = SessionStore::new(MemoryStore::new());
    store.save(&SessionState::student("alice", false)).unwrap();

    assert_eq!(store.key(), "gradeup_user_session");
    let raw = store.inner().get(SESSION_KEY).unwrap().unwrap();
    assert_eq!(
        String::from_utf8(raw).unwrap(),
        r#"{"isLoggedIn":true,"username":"alice","userRole":"student","isPremium":false}"#
    );
}

// =========================================================================
// Clear
// =========================================================================

#[test]
fn test_clear_removes_record() {
    let mut store = SessionStore::new(MemoryStore::new());
    store.save(&SessionState::student("alice", false)).unwrap();

    store.clear().unwrap();

    assert_eq!(store.load(), None);
}

#[test]
fn test_clear_twice_matches_clear_once() {
    let mut once = SessionStore::new(MemoryStore::new());
    once.save(&SessionState::admin("Admin")).unwrap();
    once.clear().unwrap();

    let mut twice = SessionStore::new(MemoryStore::new());
    twice.save(&SessionState::admin("Admin")).unwrap();
    twice.clear().unwrap();
    twice.clear().unwrap();

    assert_eq!(once.load(), twice.load());
    assert!(twice.inner().is_empty());
}

#[test]
fn test_clear_on_empty_store_is_ok() {
    let mut store = SessionStore::new(MemoryStore::new());
    assert!(store.clear().is_ok());
}

// =========================================================================
// Malformed records read as absent
// =========================================================================

#[test]
fn test_load_empty_store_is_none() {
    let store = SessionStore::new(MemoryStore::new());
    assert_eq!(store.load(), None);
}

#[test]
fn test_load_garbage_is_none() {
    assert_eq!(store_with_raw(b"not json at all").load(), None);
    assert_eq!(store_with_raw(b"").load(), None);
}

#[test]
fn test_load_old_shape_is_none() {
    // A record from a build with a different session shape.
    let store = store_with_raw(br#"{"loggedIn":true,"name":"alice"}"#);
    assert_eq!(store.load(), None);
}

#[test]
fn test_load_unknown_role_is_none() {
    let store = store_with_raw(
        br#"{"isLoggedIn":true,"username":"x","userRole":"teacher","isPremium":false}"#,
    );
    assert_eq!(store.load(), None);
}

#[test]
fn test_load_record_violating_invariants_is_none() {
    let store = store_with_raw(
        br#"{"isLoggedIn":false,"username":"","userRole":"student","isPremium":true}"#,
    );
    assert_eq!(store.load(), None);
}

#[test]
fn test_load_logged_out_admin_record_is_none() {
    // Logged-out sessions always carry the default Student role.
    let store = store_with_raw(
        br#"{"isLoggedIn":false,"username":"","userRole":"admin","isPremium":false}"#,
    );
    assert_eq!(store.load(), None);
}

#[test]
fn test_load_accepts_record_written_by_front_end() {
    let store = store_with_raw(
        br#"{"isLoggedIn":true,"username":"maria","userRole":"student","isPremium":true}"#,
    );
    assert_eq!(store.load(), Some(SessionState::student("maria", true)));
}
