//! Email verification codes.
//!
//! Issues and verifies short-lived six-digit numeric codes linked to an
//! email address. Only SHA-256 hashes of codes are stored.

use rand::Rng;
use sha2::{Digest, Sha256};
use sqlx::PgPool;

pub const OTP_LEN: usize = 6;
pub const OTP_TTL_MINUTES: i32 = 10;
const OTP_MIN: u32 = 100_000;
const OTP_MAX: u32 = 999_999;
const MAX_FAILED_ATTEMPTS: i32 = 5;

#[derive(Debug, thiserror::Error)]
pub enum OtpError {
    #[error("invalid email")]
    InvalidEmail,
    #[error("invalid code")]
    InvalidCode,
    #[error("expired or incorrect code")]
    VerificationFailed,
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

#[must_use]
pub fn normalize_email(email: &str) -> Option<String> {
    let normalized = email.trim().to_ascii_lowercase();
    let (local, domain) = normalized.split_once('@')?;
    if local.is_empty() || domain.is_empty() || domain.contains('@') || normalized.contains(char::is_whitespace) {
        return None;
    }
    Some(normalized)
}

/// Parse a user-entered code. Accepts exactly six ASCII digits, surrounding
/// whitespace ignored.
#[must_use]
pub fn normalize_otp(code: &str) -> Option<u32> {
    let trimmed = code.trim();
    if trimmed.len() != OTP_LEN || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    trimmed.parse().ok().filter(|v| (OTP_MIN..=OTP_MAX).contains(v))
}

#[must_use]
pub fn generate_otp() -> u32 {
    rand::rng().random_range(OTP_MIN..=OTP_MAX)
}

#[must_use]
pub fn hash_otp(otp: u32) -> String {
    let mut hasher = Sha256::new();
    hasher.update(otp.to_string().as_bytes());
    let bytes = hasher.finalize();
    bytes.iter().map(|b| format!("{b:02x}")).collect::<String>()
}

/// Create a fresh code for `email`, replacing any unconsumed one.
///
/// # Errors
///
/// Returns [`OtpError::InvalidEmail`] for malformed addresses, or a database
/// error.
pub async fn issue_otp(pool: &PgPool, email: &str) -> Result<u32, OtpError> {
    let normalized = normalize_email(email).ok_or(OtpError::InvalidEmail)?;

    sqlx::query("DELETE FROM email_otps WHERE email = $1 AND consumed_at IS NULL")
        .bind(&normalized)
        .execute(pool)
        .await?;

    let otp = generate_otp();
    sqlx::query(
        r"INSERT INTO email_otps (email, code_hash, expires_at)
          VALUES ($1, $2, now() + make_interval(mins => $3))",
    )
    .bind(&normalized)
    .bind(hash_otp(otp))
    .bind(OTP_TTL_MINUTES)
    .execute(pool)
    .await?;

    Ok(otp)
}

/// Consume the newest live code for `email` and mark the user verified.
///
/// A wrong code counts as a failed attempt; the code is burned after
/// `MAX_FAILED_ATTEMPTS` failures.
///
/// # Errors
///
/// Returns [`OtpError::VerificationFailed`] when no live code matches.
pub async fn verify_otp(pool: &PgPool, email: &str, code: &str) -> Result<(), OtpError> {
    let normalized_email = normalize_email(email).ok_or(OtpError::InvalidEmail)?;
    let otp = normalize_otp(code).ok_or(OtpError::InvalidCode)?;

    let consumed = sqlx::query(
        r"UPDATE email_otps
          SET consumed_at = now()
          WHERE id = (
              SELECT id
              FROM email_otps
              WHERE email = $1
                AND consumed_at IS NULL
                AND expires_at > now()
              ORDER BY created_at DESC
              LIMIT 1
          )
          AND code_hash = $2
          RETURNING id",
    )
    .bind(&normalized_email)
    .bind(hash_otp(otp))
    .fetch_optional(pool)
    .await?;

    if consumed.is_none() {
        sqlx::query(
            r"UPDATE email_otps
              SET attempts = attempts + 1,
                  consumed_at = CASE WHEN attempts + 1 >= $2 THEN now() ELSE consumed_at END
              WHERE id = (
                  SELECT id
                  FROM email_otps
                  WHERE email = $1
                    AND consumed_at IS NULL
                    AND expires_at > now()
                  ORDER BY created_at DESC
                  LIMIT 1
              )",
        )
        .bind(&normalized_email)
        .bind(MAX_FAILED_ATTEMPTS)
        .execute(pool)
        .await?;
        return Err(OtpError::VerificationFailed);
    }

    sqlx::query("UPDATE users SET verified = true WHERE email = $1")
        .bind(&normalized_email)
        .execute(pool)
        .await?;

    Ok(())
}

#[cfg(test)]
#[path = "otp_test.rs"]
mod tests;
