//! SMTP transport backed by `lettre`.
//!
//! A fresh relay connection is opened for every message. There is no pool,
//! so concurrent sends each negotiate their own TLS session.

use lettre::message::{Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use super::types::{MailError, MailMessage, MailTransport};

pub struct SmtpMailer {
    relay: String,
    credentials: Credentials,
}

impl SmtpMailer {
    #[must_use]
    pub fn new(relay: String, user: String, pass: String) -> Self {
        Self { relay, credentials: Credentials::new(user, pass) }
    }
}

/// Convert a rendered message into a `multipart/alternative` lettre message.
pub(crate) fn build_message(message: &MailMessage) -> Result<Message, MailError> {
    let from: Mailbox = message
        .from
        .parse()
        .map_err(|e: lettre::address::AddressError| MailError::InvalidAddress(format!("{}: {e}", message.from)))?;
    let to: Mailbox = message
        .to
        .parse()
        .map_err(|e: lettre::address::AddressError| MailError::InvalidAddress(format!("{}: {e}", message.to)))?;

    Message::builder()
        .from(from)
        .to(to)
        .subject(message.subject.as_str())
        .multipart(MultiPart::alternative_plain_html(message.text.clone(), message.html.clone()))
        .map_err(|e| MailError::Build(e.to_string()))
}

#[async_trait::async_trait]
impl MailTransport for SmtpMailer {
    async fn send(&self, message: &MailMessage) -> Result<(), MailError> {
        let email = build_message(message)?;
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&self.relay)
            .map_err(|e| MailError::Delivery(e.to_string()))?
            .credentials(self.credentials.clone())
            .build();

        transport
            .send(email)
            .await
            .map_err(|e| MailError::Delivery(e.to_string()))?;
        Ok(())
    }

    fn provider(&self) -> &'static str {
        "smtp"
    }
}

#[cfg(test)]
#[path = "smtp_test.rs"]
mod tests;
