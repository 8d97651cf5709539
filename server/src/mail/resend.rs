//! Resend HTTP transport.

use resend_rs::Resend;
use resend_rs::types::CreateEmailBaseOptions;

use super::types::{MailError, MailMessage, MailTransport};

pub struct ResendMailer {
    api_key: String,
}

impl ResendMailer {
    #[must_use]
    pub fn new(api_key: String) -> Self {
        Self { api_key }
    }
}

#[async_trait::async_trait]
impl MailTransport for ResendMailer {
    async fn send(&self, message: &MailMessage) -> Result<(), MailError> {
        let resend = Resend::new(&self.api_key);
        let to = [message.to.as_str()];

        let email = CreateEmailBaseOptions::new(message.from.as_str(), to, message.subject.as_str())
            .with_text(&message.text)
            .with_html(&message.html);
        resend
            .emails
            .send(email)
            .await
            .map_err(|e| MailError::Delivery(e.to_string()))?;
        Ok(())
    }

    fn provider(&self) -> &'static str {
        "resend"
    }
}
