//! Email verification routes.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};

use crate::services::{otp as otp_svc, otp_mail};
use crate::state::AppState;

pub(crate) fn otp_error_to_status(err: otp_svc::OtpError) -> StatusCode {
    match err {
        otp_svc::OtpError::InvalidEmail | otp_svc::OtpError::InvalidCode => StatusCode::BAD_REQUEST,
        otp_svc::OtpError::VerificationFailed => StatusCode::UNAUTHORIZED,
        otp_svc::OtpError::Db(e) => {
            tracing::error!(error = %e, "otp query failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

#[derive(Deserialize)]
pub struct RequestOtpBody {
    pub email: String,
}

#[derive(Deserialize)]
pub struct VerifyOtpBody {
    pub email: String,
    pub otp: String,
}

#[derive(Serialize)]
pub struct VerifyOtpResponse {
    pub verified: bool,
}

/// `POST /api/v1/user/otp/request`: issue a code and email it.
pub async fn request_otp(State(state): State<AppState>, Json(body): Json<RequestOtpBody>) -> StatusCode {
    let Some(email) = otp_svc::normalize_email(&body.email) else {
        return StatusCode::BAD_REQUEST;
    };
    let Some(mailer) = &state.mailer else {
        tracing::warn!("otp requested but mail is not configured");
        return StatusCode::SERVICE_UNAVAILABLE;
    };

    let otp = match otp_svc::issue_otp(&state.pool, &email).await {
        Ok(otp) => otp,
        Err(e) => return otp_error_to_status(e),
    };

    match otp_mail::send_verification_email(mailer.transport.as_ref(), &mailer.sender, &email, otp).await {
        Ok(()) => StatusCode::ACCEPTED,
        Err(e) => {
            tracing::error!(error = %e, to = %email, "verification email failed");
            StatusCode::BAD_GATEWAY
        }
    }
}

/// `POST /api/v1/user/otp/verify`: consume a code and mark the email verified.
pub async fn verify_otp(
    State(state): State<AppState>,
    Json(body): Json<VerifyOtpBody>,
) -> Result<Json<VerifyOtpResponse>, StatusCode> {
    otp_svc::verify_otp(&state.pool, &body.email, &body.otp)
        .await
        .map_err(otp_error_to_status)?;
    Ok(Json(VerifyOtpResponse { verified: true }))
}
