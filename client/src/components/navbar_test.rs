use super::*;
use crate::state::notice::NoticeLevel;
use crate::state::token_store::{MemoryTokenStore, TokenStoreError};

fn paths(items: &[NavItem]) -> Vec<&'static str> {
    items.iter().filter_map(NavItem::path).collect()
}

// =============================================================
// Menu toggle
// =============================================================

#[test]
fn menu_starts_closed() {
    assert!(!Navbar::new("/app").menu_open);
}

#[test]
fn toggle_twice_restores_state() {
    let mut nav = Navbar::new("/app");
    nav.toggle_menu();
    assert!(nav.menu_open);
    nav.toggle_menu();
    assert!(!nav.menu_open);

    nav.menu_open = true;
    nav.toggle_menu();
    nav.toggle_menu();
    assert!(nav.menu_open);
}

#[test]
fn navigate_closes_menu_and_sets_active() {
    let mut nav = Navbar::new("/app");
    nav.toggle_menu();
    nav.navigate("/app/posts");
    assert!(!nav.menu_open);
    assert!(nav.is_active("/app/posts"));
    assert!(!nav.is_active("/app"));
}

// =============================================================
// Link visibility
// =============================================================

#[test]
fn logged_out_shows_signin_and_signup_only() {
    let nav = Navbar::new("/app");
    let items = nav.links(&SessionState::default());
    let p = paths(&items);

    assert!(p.contains(&"/app/signin"));
    assert!(p.contains(&"/app/signup"));
    assert!(!p.contains(&"/app/new-post"));
    assert!(!p.contains(&"/app/profile"));
    assert!(!p.contains(&"/app/fav"));
    assert!(!items.contains(&NavItem::Logout));
}

#[test]
fn logged_in_shows_member_links_and_logout() {
    let nav = Navbar::new("/app");
    let items = nav.links(&SessionState::new("tok"));
    let p = paths(&items);

    assert!(!p.contains(&"/app/signin"));
    assert!(!p.contains(&"/app/signup"));
    assert!(p.contains(&"/app/new-post"));
    assert!(p.contains(&"/app/code"));
    assert!(p.contains(&"/app/profile"));
    assert!(p.contains(&"/app/fav"));
    assert_eq!(items.last(), Some(&NavItem::Logout));
}

#[test]
fn common_links_lead_in_both_states() {
    let nav = Navbar::default();
    for session in [SessionState::default(), SessionState::new("tok")] {
        let p = paths(&nav.links(&session));
        assert_eq!(&p[..3], &["/app", "/app/posts", "/app/leaderboard"]);
    }
}

#[test]
fn logout_item_label() {
    assert_eq!(NavItem::Logout.label(), "Logout");
    assert_eq!(NavItem::Logout.path(), None);
}

// =============================================================
// Logout
// =============================================================

#[test]
fn logout_clears_token_and_flag() {
    let store = MemoryTokenStore::with_token("tok");
    let mut session = SessionState::new("tok");
    let mut nav = Navbar::new("/app/profile");
    nav.toggle_menu();

    let notice = nav.logout(&mut session, &store);

    assert!(!session.logged_in());
    assert_eq!(store.load().unwrap(), None);
    assert!(!nav.menu_open);
    assert_eq!(notice.level, NoticeLevel::Success);
    assert_eq!(notice.message, LOGOUT_MESSAGE);
}

struct BrokenStore;

impl TokenStore for BrokenStore {
    fn load(&self) -> Result<Option<String>, TokenStoreError> {
        Err(TokenStoreError::NoHomeDir)
    }
    fn save(&self, _token: &str) -> Result<(), TokenStoreError> {
        Err(TokenStoreError::NoHomeDir)
    }
    fn remove(&self) -> Result<(), TokenStoreError> {
        Err(TokenStoreError::NoHomeDir)
    }
}

#[test]
fn logout_still_clears_session_when_store_fails() {
    let mut session = SessionState::new("tok");
    let notice = Navbar::default().logout(&mut session, &BrokenStore);
    assert!(!session.logged_in());
    assert_eq!(notice.message, LOGOUT_MESSAGE);
}
