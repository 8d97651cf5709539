//! Provider-neutral mail message and error types.
//!
//! Shared by the SMTP and Resend transports so the OTP dispatcher never
//! depends on a specific provider crate.

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by mail configuration and delivery.
#[derive(Debug, thiserror::Error)]
pub enum MailError {
    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),

    /// A required credential environment variable is not set.
    #[error("missing mail credential: env var {var} not set")]
    MissingCredential { var: String },

    /// A sender or recipient address could not be parsed.
    #[error("invalid mail address: {0}")]
    InvalidAddress(String),

    /// The message could not be assembled.
    #[error("message build failed: {0}")]
    Build(String),

    /// The provider rejected the message or the connection failed.
    #[error("mail delivery failed: {0}")]
    Delivery(String),
}

// =============================================================================
// MESSAGE
// =============================================================================

/// A fully rendered outbound email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailMessage {
    /// Sender mailbox, e.g. `"Style Share" <noreply@example.com>`.
    pub from: String,
    pub to: String,
    pub subject: String,
    /// Plain-text alternative body.
    pub text: String,
    pub html: String,
}

// =============================================================================
// TRANSPORT
// =============================================================================

/// Provider-neutral async trait for sending mail. Enables mocking in tests.
#[async_trait::async_trait]
pub trait MailTransport: Send + Sync {
    /// Deliver one message.
    ///
    /// # Errors
    ///
    /// Returns a [`MailError`] if the message cannot be built or the provider
    /// rejects it. No retry is attempted.
    async fn send(&self, message: &MailMessage) -> Result<(), MailError>;

    /// Short provider name for logs.
    fn provider(&self) -> &'static str;
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
