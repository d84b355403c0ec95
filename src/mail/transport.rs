use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use super::message::OutgoingMail;

/// Port trait for a handle that can deliver one mail message.
///
/// Implementations may deliver via SMTP, write to a file for development,
/// or simply record the message in tests.
///
/// ## Design notes
///
/// - The trait does not validate addresses or decide *whether* a mail
///   should go out. Those concerns belong to the calling service.
/// - [`account`](MailTransport::account) exposes the address the transport
///   authenticates as, because the contact pipeline addresses its mail to
///   the same account it sends from.
///
/// ## Thread safety
///
/// Implementations must be `Send + Sync` so a transport can be shared via
/// `Arc` inside an async runtime.
#[async_trait]
pub trait MailTransport: Send + Sync {
    /// Address of the account this transport sends as.
    fn account(&self) -> &str;

    /// Delivers a single message.
    ///
    /// Returns `Err` for any delivery failure. Callers should treat such
    /// failures as delivery errors, not validation errors.
    async fn send(&self, mail: OutgoingMail) -> Result<()>;
}

/// Port trait for constructing a [`MailTransport`].
///
/// A fresh transport is created for every send. Construction is where
/// configuration is validated, so it can fail; no connection is opened
/// until the transport is actually used.
#[async_trait]
pub trait TransportFactory: Send + Sync {
    async fn create_transport(&self) -> Result<Arc<dyn MailTransport>>;
}
