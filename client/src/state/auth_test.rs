use super::*;
use crate::state::token_store::MemoryTokenStore;

#[test]
fn default_session_is_logged_out() {
    let session = SessionState::default();
    assert!(!session.logged_in());
    assert_eq!(session.token(), "");
}

#[test]
fn non_empty_token_is_logged_in() {
    assert!(SessionState::new("abc").logged_in());
}

#[test]
fn whitespace_token_is_logged_out() {
    assert!(!SessionState::new("   ").logged_in());
}

#[test]
fn clear_logs_out() {
    let mut session = SessionState::new("abc");
    session.clear();
    assert!(!session.logged_in());
}

#[test]
fn restore_reads_persisted_token() {
    let store = MemoryTokenStore::with_token("persisted");
    let session = SessionState::restore(&store).unwrap();
    assert_eq!(session.token(), "persisted");
}

#[test]
fn restore_without_token_is_logged_out() {
    let session = SessionState::restore(&MemoryTokenStore::default()).unwrap();
    assert!(!session.logged_in());
}

#[test]
fn set_token_trims_and_logs_in() {
    let mut session = SessionState::default();
    session.set_token("  fresh  ");
    assert_eq!(session.token(), "fresh");
    assert!(session.logged_in());
    session.set_token(" ");
    assert!(!session.logged_in());
}
