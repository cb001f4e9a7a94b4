//! The controller over a real directory: sessions survive a restart.

use gradeup::prelude::*;

fn app_in(dir: &std::path::Path) -> App<FileStore> {
    AppBuilder::new().build(FileStore::new(dir))
}

#[test]
fn test_student_session_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    {
        let mut app = app_in(dir.path());
        app.login("alice", "x").unwrap();
        let request = app.request_upgrade().unwrap();
        app.resolve_upgrade(request, true).unwrap();
    }

    let app = app_in(dir.path());

    assert_eq!(app.state(), &SessionState::student("alice", true));
    assert_eq!(app.view().as_student().unwrap().gate, Gate::Unlocked);
}

#[test]
fn test_logout_removes_file_and_restart_is_logged_out() {
    let dir = tempfile::tempdir().unwrap();
    {
        let mut app = app_in(dir.path());
        app.login("alice", "x").unwrap();
        assert!(dir.path().join("gradeup_user_session.json").is_file());
        app.logout().unwrap();
    }

    assert!(!dir.path().join("gradeup_user_session.json").exists());
    let app = app_in(dir.path());
    assert_eq!(app.view(), &ViewSpec::Login);
}

#[test]
fn test_corrupt_file_starts_logged_out() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("gradeup_user_session.json"), "null").unwrap();

    let app = app_in(dir.path());

    assert_eq!(app.state(), &SessionState::logged_out());
}
