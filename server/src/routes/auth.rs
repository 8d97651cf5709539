//! Bearer-token auth for the admin API.

use axum::extract::FromRef;
use axum::http::header::AUTHORIZATION;
use axum::http::{HeaderMap, StatusCode};

use crate::services::session;
use crate::state::AppState;

/// Extract the token from an `Authorization: Bearer <token>` header.
/// The scheme is matched case-insensitively; an empty token is rejected.
pub(crate) fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?.trim();
    let (scheme, token) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Authenticated administrator extracted from the bearer token.
/// Use as a handler parameter to require admin access.
pub struct AdminUser {
    pub user: session::SessionUser,
}

impl<S> axum::extract::FromRequestParts<S> for AdminUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers).ok_or(StatusCode::UNAUTHORIZED)?;

        let app_state = AppState::from_ref(state);
        let user = session::validate_session(&app_state.pool, token)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "session lookup failed");
                StatusCode::INTERNAL_SERVER_ERROR
            })?
            .ok_or(StatusCode::UNAUTHORIZED)?;

        if !user.is_admin {
            tracing::warn!(user_id = %user.id, "non-admin attempted admin route");
            return Err(StatusCode::FORBIDDEN);
        }

        Ok(Self { user })
    }
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
