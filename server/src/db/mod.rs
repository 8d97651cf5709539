//! Postgres pool setup for posts, comments, sessions and OTP codes.
//!
//! The schema lives in `migrations/` and is applied on every boot; the
//! moderation and OTP services assume it is current.

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

use std::time::Duration;

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Pool size from a raw `DB_MAX_CONNECTIONS` value. Zero, junk and unset
/// all fall back to the default.
pub(crate) fn parse_max_connections(raw: Option<&str>) -> u32 {
    raw.and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|n| *n > 0)
        .unwrap_or(DEFAULT_MAX_CONNECTIONS)
}

/// Connect to `database_url` and bring the schema up to date.
///
/// # Errors
///
/// Returns an error if the connection or a migration fails.
pub async fn init_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    let max_connections = parse_max_connections(std::env::var("DB_MAX_CONNECTIONS").ok().as_deref());
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect(database_url)
        .await?;

    sqlx::migrate!("src/db/migrations").run(&pool).await?;
    tracing::info!(max_connections, "database ready");

    Ok(pool)
}
