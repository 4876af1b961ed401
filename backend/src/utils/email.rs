//! Outbound email for the password-reset flow.

use anyhow::Result;
use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};

use crate::config::Config;

/// Sends account-related mail. Handlers depend on this trait so tests can
/// substitute a capture or mock transport.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send_password_reset(&self, to_email: &str, reset_token: &str) -> Result<()>;
}

pub struct SmtpMailer {
    transport: SmtpTransport,
    from_address: String,
    frontend_url: String,
    skip_send: bool,
}

impl SmtpMailer {
    pub fn new(config: &Config) -> Result<Self> {
        let transport = if config.smtp_username.is_empty() {
            SmtpTransport::builder_dangerous(&config.smtp_host)
                .port(config.smtp_port)
                .build()
        } else {
            let creds = Credentials::new(
                config.smtp_username.clone(),
                config.smtp_password.clone(),
            );
            SmtpTransport::relay(&config.smtp_host)?
                .port(config.smtp_port)
                .credentials(creds)
                .build()
        };

        Ok(Self {
            transport,
            from_address: config.smtp_from_address.clone(),
            frontend_url: config.frontend_url.clone(),
            skip_send: config.smtp_skip_send,
        })
    }

    fn reset_url(&self, reset_token: &str) -> String {
        format!("{}/reset-password?token={}", self.frontend_url, reset_token)
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send_password_reset(&self, to_email: &str, reset_token: &str) -> Result<()> {
        if self.skip_send {
            tracing::info!(to = %to_email, "SMTP_SKIP_SEND set, not sending reset email");
            return Ok(());
        }

        let body = format!(
            r#"
We received a request to reset the password for your TaskY account.

Click the link below to choose a new password:

{}

This link is valid for 1 hour.

If you did not request a password reset, you can safely ignore this email.

---
TaskY
"#,
            self.reset_url(reset_token)
        );

        let email = Message::builder()
            .from(self.from_address.parse()?)
            .to(to_email.parse()?)
            .subject("Password reset request - TaskY")
            .header(ContentType::TEXT_PLAIN)
            .body(body)?;

        self.transport.send(&email)?;
        Ok(())
    }
}
