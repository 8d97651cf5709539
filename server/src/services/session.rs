//! Bearer-token session lookup.
//!
//! Tokens are opaque strings stored in `sessions`. The admin API only
//! reads them; sign-in (outside this service) issues them.

use sqlx::{PgPool, Row};
use uuid::Uuid;

/// User row returned from session validation.
#[derive(Debug, Clone, serde::Serialize)]
pub struct SessionUser {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    /// Whether the user may call `/api/v1/admin/*`.
    pub is_admin: bool,
}

/// Validate a session token and return the associated user.
pub async fn validate_session(pool: &PgPool, token: &str) -> Result<Option<SessionUser>, sqlx::Error> {
    let row = sqlx::query(
        r"SELECT u.id, u.username, u.email, u.is_admin
          FROM sessions s
          JOIN users u ON u.id = s.user_id
          WHERE s.token = $1 AND s.expires_at > now()",
    )
    .bind(token)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|r| SessionUser {
        id: r.get("id"),
        username: r.get("username"),
        email: r.get("email"),
        is_admin: r.get("is_admin"),
    }))
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
