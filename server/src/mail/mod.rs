//! Mail provider adapter for transactional email.
//!
//! DESIGN
//! ======
//! `MailConfig` is read once at startup; `transport_from_config` picks the SMTP or
//! Resend transport and hides it behind [`MailTransport`]. Transports keep no
//! connection state between sends.

pub mod config;
pub mod resend;
pub mod smtp;
pub mod types;

use std::sync::Arc;

use config::{MailConfig, MailProvider};
pub use types::{MailError, MailMessage, MailTransport};

/// Build the configured transport.
#[must_use]
pub fn transport_from_config(config: &MailConfig) -> Arc<dyn MailTransport> {
    match &config.provider {
        MailProvider::Smtp { relay, user, pass } => {
            Arc::new(smtp::SmtpMailer::new(relay.clone(), user.clone(), pass.clone()))
        }
        MailProvider::Resend { api_key } => Arc::new(resend::ResendMailer::new(api_key.clone())),
    }
}

// =============================================================================
// TEST DOUBLES
// =============================================================================


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_from_config_selects_smtp() {
        let cfg = MailConfig {
            provider: MailProvider::Smtp { relay: "smtp.gmail.com".into(), user: "u@x.io".into(), pass: "p".into() },
            from_address: "u@x.io".into(),
        };
        assert_eq!(transport_from_config(&cfg).provider(), "smtp");
    }

    #[test]
    fn transport_from_config_selects_resend() {
        let cfg = MailConfig {
            provider: MailProvider::Resend { api_key: "re_123".into() },
            from_address: "noreply@x.io".into(),
        };
        assert_eq!(transport_from_config(&cfg).provider(), "resend");
    }
}
