use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use lettre::message::{Mailbox, Message, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Tokio1Executor};
use tracing::debug;

use crate::config::smtp::SmtpSettings;
use crate::mail::{
    message::OutgoingMail,
    smtp::config::TransportConfig,
    transport::{MailTransport, TransportFactory},
};

/// [`TransportFactory`] implementation backed by lettre's async SMTP
/// transport.
///
/// Holds only the raw settings snapshot. Validation and transport
/// construction happen on every [`create_transport`] call, so a fresh
/// handle is produced per send and configuration problems surface as
/// errors instead of stale state.
///
/// [`create_transport`]: TransportFactory::create_transport
#[derive(Clone, Debug)]
pub struct SmtpTransportFactory {
    settings: SmtpSettings,
}

impl SmtpTransportFactory {
    pub fn new(settings: SmtpSettings) -> Self {
        Self { settings }
    }
}

#[async_trait]
impl TransportFactory for SmtpTransportFactory {
    async fn create_transport(&self) -> Result<Arc<dyn MailTransport>> {
        let config = TransportConfig::from_settings(&self.settings)?;
        let transport = SmtpMailTransport::new(&config)?;

        debug!(
            "smtp transport ready: host={} port={} secure={}",
            config.host, config.port, config.secure
        );

        Ok(Arc::new(transport))
    }
}

/// SMTP-backed [`MailTransport`].
///
/// ## Responsibilities
///
/// - Builds a MIME message from [`OutgoingMail`]
/// - Sends it through the relay described by [`TransportConfig`]
///
/// ## What this type does *not* do
///
/// - Read configuration from the environment
/// - Validate form input or escape HTML
///
/// Those concerns belong to higher layers.
#[derive(Clone, Debug)]
pub struct SmtpMailTransport {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
    account: String,
}

impl SmtpMailTransport {
    /// Builds the transport handle. No connection is opened here;
    /// the relay is first contacted when a message is sent.
    pub fn new(config: &TransportConfig) -> Result<Self> {
        let creds = Credentials::new(config.user.clone(), config.pass.clone());

        let builder = if config.secure {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
        }
        .with_context(|| format!("invalid relay host: {}", config.host))?;

        // lettre exposes a single timeout knob for the SMTP session; the
        // three configured deadlines share one value.
        let mailer = builder
            .port(config.port)
            .credentials(creds)
            .timeout(Some(config.connection_timeout))
            .build();

        Ok(Self {
            mailer,
            account: config.user.clone(),
        })
    }

    /// Builds a `lettre::Message` from an [`OutgoingMail`].
    ///
    /// Kept separate from [`send`](MailTransport::send) so the MIME
    /// construction can be unit tested without SMTP I/O.
    fn build_message(&self, mail: OutgoingMail) -> Result<Message> {
        // Sanitize subject to prevent header injection
        let mut subject = mail.subject;
        subject.retain(|c| c != '\r' && c != '\n');

        let from: Mailbox = mail
            .from
            .parse()
            .with_context(|| format!("invalid from address: {}", mail.from))?;
        let to: Mailbox = mail
            .to
            .parse()
            .with_context(|| format!("invalid to address: {}", mail.to))?;

        let mut builder = Message::builder().from(from).to(to).subject(subject);

        // Reply-To carries the visitor's address verbatim. The shape check
        // upstream is looser than a full mailbox grammar, so a value that
        // does not parse is dropped rather than failing the send.
        if let Ok(reply_to) = mail.reply_to.parse::<Mailbox>() {
            builder = builder.reply_to(reply_to);
        }

        Ok(builder.singlepart(SinglePart::html(mail.html))?)
    }
}

#[async_trait]
impl MailTransport for SmtpMailTransport {
    fn account(&self) -> &str {
        &self.account
    }

    async fn send(&self, mail: OutgoingMail) -> Result<()> {
        let message = self.build_message(mail)?;
        self.mailer
            .send(message)
            .await
            .context("SMTP send failed")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_settings() -> SmtpSettings {
        SmtpSettings {
            host: Some("smtp.example.com".into()),
            port: Some("587".into()),
            user: Some("site@nefara.com".into()),
            pass: Some("secret".into()),
        }
    }

    fn test_transport() -> SmtpMailTransport {
        let config = TransportConfig::from_settings(&full_settings()).expect("valid settings");
        SmtpMailTransport::new(&config).expect("transport should build")
    }

    fn sample_mail() -> OutgoingMail {
        OutgoingMail {
            from: "Contact Us from Nefara! <site@nefara.com>".into(),
            to: "site@nefara.com".into(),
            subject: "Hi".into(),
            reply_to: "visitor@example.com".into(),
            html: "<div><p>Hello</p></div>".into(),
        }
    }

    #[test]
    fn builds_message_with_all_headers() {
        let transport = test_transport();

        let msg = transport.build_message(sample_mail()).expect("message build");
        let formatted = msg.formatted();
        let raw = String::from_utf8_lossy(&formatted);

        assert!(raw.contains("Contact Us from Nefara!"));
        assert!(raw.contains("To: site@nefara.com"));
        assert!(raw.contains("Subject: Hi"));
        assert!(raw.contains("Reply-To: visitor@example.com"));
        assert!(raw.contains("Content-Type: text/html"));
        assert!(raw.contains("<div><p>Hello</p></div>"));
    }

    #[test]
    fn strips_crlf_from_subject() {
        let transport = test_transport();

        let mail = OutgoingMail {
            subject: "Hi\r\nX-Injected: 1".into(),
            ..sample_mail()
        };

        let msg = transport.build_message(mail).expect("message build");
        let raw_bytes = msg.formatted();
        let raw = String::from_utf8_lossy(&raw_bytes);

        assert!(raw.contains("Subject: HiX-Injected: 1"));
        assert!(!raw.contains("\r\nX-Injected: 1\r\n"));
    }

    #[test]
    fn allows_empty_subject() {
        let transport = test_transport();

        let mail = OutgoingMail {
            subject: String::new(),
            ..sample_mail()
        };

        transport.build_message(mail).expect("message build");
    }

    #[test]
    fn drops_unparsable_reply_to_instead_of_failing() {
        let transport = test_transport();

        let mail = OutgoingMail {
            reply_to: "<script>@example.com".into(),
            ..sample_mail()
        };

        let msg = transport.build_message(mail).expect("message build");
        let formatted = msg.formatted();
        let raw = String::from_utf8_lossy(&formatted);

        assert!(!raw.contains("Reply-To"));
    }

    #[test]
    fn rejects_unparsable_from_address() {
        let transport = test_transport();

        let mail = OutgoingMail {
            from: "not an address".into(),
            ..sample_mail()
        };

        let err = transport.build_message(mail).unwrap_err();
        assert!(err.to_string().contains("invalid from address"));
    }

    #[tokio::test]
    async fn factory_builds_transport_with_account() {
        let factory = SmtpTransportFactory::new(full_settings());

        let transport = factory.create_transport().await.expect("should build");
        assert_eq!(transport.account(), "site@nefara.com");
    }

    #[tokio::test]
    async fn factory_builds_a_fresh_transport_per_call() {
        let factory = SmtpTransportFactory::new(full_settings());

        let first = factory.create_transport().await.unwrap();
        let second = factory.create_transport().await.unwrap();

        assert!(!Arc::ptr_eq(&first, &second));
    }

    #[tokio::test]
    async fn factory_surfaces_missing_settings_by_name() {
        let factory = SmtpTransportFactory::new(SmtpSettings {
            pass: None,
            ..full_settings()
        });

        let err = factory
            .create_transport()
            .await
            .err()
            .expect("create_transport should fail");
        assert!(err
            .to_string()
            .contains("SMTP_PASS environment variable is required"));
    }
}
