/// Describes one outgoing mail message.
///
/// This type is transport-agnostic: it only says *what* should be sent.
/// All fields are kept as plain strings on purpose. In particular
/// `reply_to` must carry the address exactly as the visitor submitted it,
/// so mailbox parsing is deferred to the transport adapter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutgoingMail {
    /// Sender line, usually a display name plus the configured account.
    pub from: String,

    /// Recipient address.
    pub to: String,

    /// Subject line, already escaped by the caller. May be empty.
    ///
    /// Header-level sanitization (CRLF stripping) happens in the
    /// transport adapter, because it depends on the actual protocol.
    pub subject: String,

    /// Reply-To address, verbatim as submitted.
    pub reply_to: String,

    /// HTML body.
    pub html: String,
}
