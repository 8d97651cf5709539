use super::*;

fn sample_message() -> MailMessage {
    MailMessage {
        from: "\"Style Share\" <styleshare@gmail.com>".into(),
        to: "reader@example.com".into(),
        subject: "Email Verification".into(),
        text: "Your OTP for email verification is 482913".into(),
        html: "<p>482913</p>".into(),
    }
}

#[test]
fn build_message_sets_headers_and_alternatives() {
    let email = build_message(&sample_message()).unwrap();
    let raw = String::from_utf8(email.formatted()).unwrap();
    assert!(raw.contains("Subject: Email Verification"));
    assert!(raw.contains("To: reader@example.com"));
    assert!(raw.contains("multipart/alternative"));
    assert!(raw.contains("text/plain"));
    assert!(raw.contains("text/html"));
    assert!(raw.contains("482913"));
}

#[test]
fn build_message_rejects_bad_recipient() {
    let mut message = sample_message();
    message.to = "not an address".into();
    let err = build_message(&message).unwrap_err();
    assert!(matches!(err, MailError::InvalidAddress(_)));
}

#[test]
fn build_message_rejects_bad_sender() {
    let mut message = sample_message();
    message.from = "Style Share".into();
    assert!(matches!(build_message(&message), Err(MailError::InvalidAddress(_))));
}

#[test]
fn smtp_mailer_reports_provider_name() {
    let mailer = SmtpMailer::new("smtp.gmail.com".into(), "u".into(), "p".into());
    assert_eq!(mailer.provider(), "smtp");
}
