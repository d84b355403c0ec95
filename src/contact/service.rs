use std::sync::Arc;

use thiserror::Error;
use tracing::error;

use crate::escape::html::escape_html;
use crate::mail::{message::OutgoingMail, transport::TransportFactory};
use crate::validate::email::validate_email_address;

/// The closed vocabulary of user-facing pipeline failures.
///
/// Only the two validation variants describe the visitor's own input; every
/// downstream problem, configuration or delivery alike, collapses into
/// [`SendFailed`](ContactError::SendFailed) so transport internals never
/// reach the caller.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("Invalid email format.")]
    InvalidEmail,

    #[error("Message cannot be empty.")]
    EmptyMessage,

    #[error("Something went wrong. Please try again.")]
    SendFailed,
}

/// Outcome of one contact submission.
///
/// The sole return contract of [`ContactService`] and the HTTP layer on
/// top of it. A success never carries an error; a failure always carries
/// one of the three [`ContactError`] messages.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContactResult {
    Success,
    Failure(ContactError),
}

/// Orchestrates validation, escaping and dispatch of contact mail.
///
/// `send_email` is a strict sequential pipeline of four gates, each
/// short-circuiting to a `Failure`:
///
/// 1. the address must pass the email shape check
/// 2. the message must be non-empty after trimming
/// 3. a transport must come out of the factory
/// 4. the dispatch itself must succeed
///
/// The public contract is total: the service always returns a
/// [`ContactResult`], never panics, and never propagates an error. There
/// are no retries; a failed send is reported once.
pub struct ContactService {
    factory: Arc<dyn TransportFactory>,
}

impl ContactService {
    pub fn new(factory: Arc<dyn TransportFactory>) -> Self {
        Self { factory }
    }

    /// Runs the pipeline for one submission.
    ///
    /// Validation sees the trimmed address, but dispatch keeps the raw
    /// one: `Reply-To` must be the address exactly as submitted. The
    /// subject is optional; a missing or empty one goes out empty.
    pub async fn send_email(
        &self,
        email: Option<&str>,
        subject: Option<&str>,
        message: Option<&str>,
    ) -> ContactResult {
        let email = match email {
            Some(e) if validate_email_address(Some(e)).is_some() => e,
            _ => return ContactResult::Failure(ContactError::InvalidEmail),
        };

        let message = match message {
            Some(m) if !m.trim().is_empty() => m,
            _ => return ContactResult::Failure(ContactError::EmptyMessage),
        };

        // Configuration problems are an operator concern; the caller only
        // ever sees the generic failure.
        let transport = match self.factory.create_transport().await {
            Ok(t) => t,
            Err(err) => {
                error!("failed to create mail transport: {:#}", err);
                return ContactResult::Failure(ContactError::SendFailed);
            }
        };

        let escaped_email = escape_html(email);
        let escaped_message = escape_html(message);
        let escaped_subject = subject.map(escape_html).unwrap_or_default();

        let account = transport.account();
        let mail = OutgoingMail {
            from: format!("Contact Us from Nefara! <{account}>"),
            to: account.to_string(),
            subject: escaped_subject,
            // Reply-To must stay a usable address for mail clients, so the
            // raw submitted value goes through unescaped.
            reply_to: email.to_string(),
            html: format!(
                "<div><h4>This message was sent by: {escaped_email}</h4><p>{escaped_message}</p></div>"
            ),
        };

        if let Err(err) = transport.send(mail).await {
            error!("failed to send contact mail: {:#}", err);
            return ContactResult::Failure(ContactError::SendFailed);
        }

        ContactResult::Success
    }
}
