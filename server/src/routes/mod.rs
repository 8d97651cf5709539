//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the admin moderation API, the email verification endpoints, and a
//! health probe under a single Axum router.

pub mod admin;
pub mod auth;
pub mod otp;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{delete, get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Full application router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/v1/admin/posts/all", get(admin::list_posts))
        .route("/api/v1/admin/comments/delete/{comment_id}", delete(admin::delete_comment))
        .route("/api/v1/user/otp/request", post(otp::request_otp))
        .route("/api/v1/user/otp/verify", post(otp::verify_otp))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
