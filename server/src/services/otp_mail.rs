//! OTP verification email dispatch.
//!
//! Renders the verification message for a numeric code and hands it to the
//! configured [`MailTransport`]. Delivery errors are returned as-is; nothing
//! here retries or queues.

use crate::mail::{MailError, MailMessage, MailTransport};

pub const OTP_MAIL_SUBJECT: &str = "Email Verification";
const OTP_MAIL_TEMPLATE: &str = include_str!("../../templates/otp_mail.html");

#[must_use]
pub fn otp_mail_text(otp: u32) -> String {
    format!("Your OTP for email verification is {otp}")
}

#[must_use]
pub fn render_otp_mail_body(otp: u32) -> String {
    OTP_MAIL_TEMPLATE
        .replace("{{OTP}}", &otp.to_string())
        .replace("{{TTL_MINUTES}}", &super::otp::OTP_TTL_MINUTES.to_string())
}

/// Assemble the verification message without sending it.
#[must_use]
pub fn build_verification_email(sender: &str, email: &str, otp: u32) -> MailMessage {
    MailMessage {
        from: sender.to_owned(),
        to: email.to_owned(),
        subject: OTP_MAIL_SUBJECT.to_owned(),
        text: otp_mail_text(otp),
        html: render_otp_mail_body(otp),
    }
}

/// Send the verification email for `otp` to `email`.
///
/// # Errors
///
/// Propagates the transport's [`MailError`] unchanged.
pub async fn send_verification_email(
    transport: &dyn MailTransport,
    sender: &str,
    email: &str,
    otp: u32,
) -> Result<(), MailError> {
    let message = build_verification_email(sender, email, otp);
    transport.send(&message).await?;
    tracing::info!(provider = transport.provider(), to = %email, "verification email sent");
    Ok(())
}

#[cfg(test)]
#[path = "otp_mail_test.rs"]
mod tests;
