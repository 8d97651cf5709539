//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the database pool and, when mail is configured, the OTP mailer.

use std::sync::Arc;

use sqlx::PgPool;

use crate::mail::MailTransport;

// =============================================================================
// MAILER
// =============================================================================

/// Transport plus the sender mailbox used for every outbound message.
#[derive(Clone)]
pub struct Mailer {
    pub transport: Arc<dyn MailTransport>,
    /// Full sender mailbox, e.g. `"Style Share" <noreply@example.com>`.
    pub sender: String,
}

// =============================================================================
// APP STATE
// =============================================================================

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped or Clone.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    /// `None` if mail env vars are not configured; OTP requests then fail
    /// with `503`.
    pub mailer: Option<Mailer>,
}

impl AppState {
    #[must_use]
    pub fn new(pool: PgPool, mailer: Option<Mailer>) -> Self {
        Self { pool, mailer }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
