//! Top navigation bar.
//!
//! DESIGN
//! ======
//! The bar owns only the mobile menu flag and the current path. Which links
//! appear is derived from the session on every call, and logout is purely
//! local: the persisted token is dropped without telling the server.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use crate::state::auth::SessionState;
use crate::state::notice::Notice;
use crate::state::token_store::TokenStore;

pub const BRAND_PATH: &str = "/app";
pub const LOGOUT_MESSAGE: &str = "Logged out successfully";

/// One entry in the navigation list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavItem {
    Link { label: &'static str, path: &'static str },
    /// Button that runs [`Navbar::logout`].
    Logout,
}

impl NavItem {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Link { label, .. } => label,
            Self::Logout => "Logout",
        }
    }

    #[must_use]
    pub fn path(&self) -> Option<&'static str> {
        match self {
            Self::Link { path, .. } => Some(path),
            Self::Logout => None,
        }
    }
}

const ALWAYS: [NavItem; 3] = [
    NavItem::Link { label: "Home", path: "/app" },
    NavItem::Link { label: "Posts", path: "/app/posts" },
    NavItem::Link { label: "Leaderboard", path: "/app/leaderboard" },
];

const SIGNED_OUT: [NavItem; 2] = [
    NavItem::Link { label: "Sign in", path: "/app/signin" },
    NavItem::Link { label: "Sign up", path: "/app/signup" },
];

const SIGNED_IN: [NavItem; 5] = [
    NavItem::Link { label: "New post", path: "/app/new-post" },
    NavItem::Link { label: "Code editor", path: "/app/code" },
    NavItem::Link { label: "Profile", path: "/app/profile" },
    NavItem::Link { label: "Favorite", path: "/app/fav" },
    NavItem::Logout,
];

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Navbar {
    pub menu_open: bool,
    pub current_path: String,
}

impl Navbar {
    #[must_use]
    pub fn new(current_path: impl Into<String>) -> Self {
        Self { menu_open: false, current_path: current_path.into() }
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Visible entries, in display order, for the given session.
    #[must_use]
    pub fn links(&self, session: &SessionState) -> Vec<NavItem> {
        let extra: &[NavItem] = if session.logged_in() { &SIGNED_IN } else { &SIGNED_OUT };
        ALWAYS.iter().chain(extra).copied().collect()
    }

    #[must_use]
    pub fn is_active(&self, path: &str) -> bool {
        self.current_path == path
    }

    /// Follow a link: record the new path and collapse the mobile menu.
    pub fn navigate(&mut self, path: &str) {
        self.current_path = path.to_owned();
        self.close_menu();
    }

    /// Sign out locally. The token is removed from `store` and the session;
    /// no request is sent.
    pub fn logout(&mut self, session: &mut SessionState, store: &dyn TokenStore) -> Notice {
        if let Err(e) = store.remove() {
            tracing::error!(error = %e, "failed to remove persisted token");
        }
        session.clear();
        self.close_menu();
        Notice::success(LOGOUT_MESSAGE)
    }
}
