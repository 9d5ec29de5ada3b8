//! Email dispatch for branding results via SMTP.

use async_trait::async_trait;
use brander_core::{BrandError, BrandResult, Config};
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use std::sync::Arc;

/// Sends an HTML email to a single recipient.
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send_html(&self, to: &str, subject: &str, html: &str) -> BrandResult<()>;
}

#[derive(Clone)]
pub struct SmtpEmailSender {
    mailer: Arc<AsyncSmtpTransport<Tokio1Executor>>,
    from: String,
}

impl SmtpEmailSender {
    /// Create the sender from config. Returns `None` if SMTP is not configured.
    pub fn from_config(config: &Config) -> Option<Self> {
        let host = config.smtp_host()?;
        let port = config.smtp_port();
        let credentials = match (config.smtp_user(), config.smtp_password()) {
            (Some(u), Some(p)) => Some(Credentials::new(u.to_string(), p.to_string())),
            _ => None,
        };

        let mailer = if config.smtp_tls() {
            let b = match AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(host) {
                Ok(b) => b.port(port),
                Err(e) => {
                    tracing::error!(host = %host, error = %e, "Invalid SMTP relay");
                    return None;
                }
            };
            let b = match credentials {
                Some(c) => b.credentials(c),
                None => b,
            };
            tracing::info!(host = %host, port = port, "Email sender initialized (SMTP with STARTTLS)");
            b.build()
        } else {
            let b = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(host).port(port);
            let b = match credentials {
                Some(c) => b.credentials(c),
                None => b,
            };
            tracing::info!(host = %host, port = port, "Email sender initialized (SMTP)");
            b.build()
        };

        Some(Self {
            mailer: Arc::new(mailer),
            from: config.email_sender().to_string(),
        })
    }
}

#[async_trait]
impl EmailSender for SmtpEmailSender {
    async fn send_html(&self, to: &str, subject: &str, html: &str) -> BrandResult<()> {
        let to_addr: Mailbox = to
            .parse()
            .map_err(|e| BrandError::EmailDispatch(format!("Invalid recipient {}: {}", to, e)))?;
        let from_addr: Mailbox = self
            .from
            .parse()
            .map_err(|e| BrandError::EmailDispatch(format!("Invalid EMAIL_SENDER: {}", e)))?;

        let email = Message::builder()
            .from(from_addr)
            .to(to_addr)
            .subject(subject)
            .header(ContentType::TEXT_HTML)
            .body(html.to_string())
            .map_err(|e| BrandError::EmailDispatch(e.to_string()))?;

        self.mailer
            .send(email)
            .await
            .map_err(|e| BrandError::EmailDispatch(e.to_string()))?;

        Ok(())
    }
}

/// Used when no SMTP host is configured; every send fails and is logged by the caller.
#[derive(Debug, Clone, Default)]
pub struct DisabledEmailSender;

#[async_trait]
impl EmailSender for DisabledEmailSender {
    async fn send_html(&self, _to: &str, _subject: &str, _html: &str) -> BrandResult<()> {
        Err(BrandError::EmailDispatch(
            "Email transport not configured (SMTP_HOST unset)".to_string(),
        ))
    }
}

/// SMTP sender when configured, otherwise the disabled sender.
pub fn email_sender_from_config(config: &Config) -> Arc<dyn EmailSender> {
    match SmtpEmailSender::from_config(config) {
        Some(sender) => Arc::new(sender),
        None => {
            tracing::warn!("SMTP_HOST not set; result emails will not be sent");
            Arc::new(DisabledEmailSender)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brander_core::BrandConfig;

    #[test]
    fn test_no_smtp_host_means_no_sender() {
        let config = Config::default();
        assert!(SmtpEmailSender::from_config(&config).is_none());
    }

    #[tokio::test]
    async fn test_smtp_sender_rejects_bad_recipient() {
        let mut inner = BrandConfig::default();
        inner.smtp_host = Some("localhost".to_string());
        inner.smtp_tls = false;
        let sender = SmtpEmailSender::from_config(&Config::from(inner)).unwrap();

        let err = sender
            .send_html("not-an-address", "subject", "<p>hi</p>")
            .await
            .unwrap_err();
        assert!(matches!(err, BrandError::EmailDispatch(_)));
    }

    #[tokio::test]
    async fn test_disabled_sender_fails() {
        let sender = DisabledEmailSender;
        let err = sender.send_html("a@b.com", "s", "b").await.unwrap_err();
        assert!(matches!(err, BrandError::EmailDispatch(_)));
    }
}
