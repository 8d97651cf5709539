//! Mail configuration parsed from environment variables.

use super::types::MailError;

pub const DEFAULT_SMTP_RELAY: &str = "smtp.gmail.com";
pub const SENDER_DISPLAY_NAME: &str = "Style Share";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MailProvider {
    /// Authenticated SMTP relay (Gmail by default).
    Smtp { relay: String, user: String, pass: String },
    /// Resend HTTP API.
    Resend { api_key: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailConfig {
    pub provider: MailProvider,
    /// Bare sender address; the display name is added by [`MailConfig::sender`].
    pub from_address: String,
}

impl MailConfig {
    /// Build typed mail config from environment variables.
    ///
    /// - `MAIL_PROVIDER`: `smtp` (default) or `resend`
    ///
    /// SMTP:
    /// - `EMAIL_USER`, `EMAIL_PASS` (required)
    /// - `SMTP_RELAY`: default `smtp.gmail.com`
    ///
    /// Resend:
    /// - `RESEND_API_KEY`, `RESEND_FROM` (required)
    pub fn from_env() -> Result<Self, MailError> {
        match parse_provider(std::env::var("MAIL_PROVIDER").ok().as_deref())? {
            ProviderKind::Smtp => {
                let user = required_env("EMAIL_USER")?;
                let pass = required_env("EMAIL_PASS")?;
                let relay = std::env::var("SMTP_RELAY")
                    .ok()
                    .filter(|v| !v.trim().is_empty())
                    .unwrap_or_else(|| DEFAULT_SMTP_RELAY.to_owned());
                Ok(Self { from_address: user.clone(), provider: MailProvider::Smtp { relay, user, pass } })
            }
            ProviderKind::Resend => {
                let api_key = required_env("RESEND_API_KEY")?;
                let from_address = required_env("RESEND_FROM")?;
                Ok(Self { provider: MailProvider::Resend { api_key }, from_address })
            }
        }
    }

    /// Sender mailbox with the product display name.
    #[must_use]
    pub fn sender(&self) -> String {
        format!("\"{SENDER_DISPLAY_NAME}\" <{}>", self.from_address)
    }

    #[must_use]
    pub fn provider_name(&self) -> &'static str {
        match self.provider {
            MailProvider::Smtp { .. } => "smtp",
            MailProvider::Resend { .. } => "resend",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ProviderKind {
    Smtp,
    Resend,
}

fn parse_provider(raw: Option<&str>) -> Result<ProviderKind, MailError> {
    match raw.map(str::trim).unwrap_or("smtp").to_ascii_lowercase().as_str() {
        "smtp" | "gmail" => Ok(ProviderKind::Smtp),
        "resend" => Ok(ProviderKind::Resend),
        other => Err(MailError::ConfigParse(format!("unknown MAIL_PROVIDER: {other}"))),
    }
}

fn required_env(var: &str) -> Result<String, MailError> {
    std::env::var(var)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| MailError::MissingCredential { var: var.to_owned() })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
