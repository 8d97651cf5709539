use super::*;
use crate::mail::test_helpers::RecordingTransport;

const SENDER: &str = "\"Style Share\" <styleshare@gmail.com>";

#[test]
fn render_body_embeds_decimal_code() {
    let html = render_otp_mail_body(482_913);
    assert!(html.contains("482913"));
    assert!(!html.contains("{{OTP}}"));
    assert!(!html.contains("{{TTL_MINUTES}}"));
}

#[test]
fn text_body_matches_expected_wording() {
    assert_eq!(otp_mail_text(100_000), "Your OTP for email verification is 100000");
}

#[test]
fn build_verification_email_uses_fixed_subject() {
    let message = build_verification_email(SENDER, "reader@example.com", 731_004);
    assert_eq!(message.subject, "Email Verification");
    assert_eq!(message.to, "reader@example.com");
    assert_eq!(message.from, SENDER);
    assert!(message.html.contains("731004"));
    assert!(message.text.ends_with("731004"));
}

#[tokio::test]
async fn send_verification_email_dispatches_one_message() {
    let transport = RecordingTransport::default();
    send_verification_email(&transport, SENDER, "reader@example.com", 555_123)
        .await
        .unwrap();

    let sent = transport.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].subject, OTP_MAIL_SUBJECT);
    assert!(sent[0].html.contains("555123"));
}

#[tokio::test]
async fn send_verification_email_propagates_transport_error() {
    let transport = RecordingTransport::failing("421 service not available");
    let err = send_verification_email(&transport, SENDER, "reader@example.com", 123_456)
        .await
        .unwrap_err();

    assert!(matches!(err, MailError::Delivery(ref msg) if msg.contains("421")));
    assert_eq!(transport.sent().len(), 1, "no retry after failure");
}
