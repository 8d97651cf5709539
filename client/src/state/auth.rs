//! Auth-session state for the current user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Passed explicitly to every view that needs the bearer token or the
//! logged-in flag; nothing reads it from a global.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::token_store::{TokenStore, TokenStoreError};

/// Bearer token for the signed-in user. Empty means signed out.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    token: String,
}

impl SessionState {
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self { token: token.into().trim().to_owned() }
    }

    /// Restore the session from a persisted token, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn restore(store: &dyn TokenStore) -> Result<Self, TokenStoreError> {
        Ok(store.load()?.map(Self::new).unwrap_or_default())
    }

    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Derived from the token: logged in iff it is non-empty.
    #[must_use]
    pub fn logged_in(&self) -> bool {
        !self.token.is_empty()
    }

    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = token.into().trim().to_owned();
    }

    pub fn clear(&mut self) {
        self.token.clear();
    }
}
