//! # SMTP Transport Configuration
//!
//! Derives a fully validated [`TransportConfig`] from the raw
//! [`SmtpSettings`](crate::config::smtp::SmtpSettings) snapshot.
//!
//! Validation happens here, at transport-build time, not at process
//! start: a server can boot without SMTP settings and only the contact
//! pipeline fails when they are absent.

use std::time::Duration;

use thiserror::Error;

use crate::config::smtp::SmtpSettings;

// All SMTP operations share one fixed deadline so a contact-form
// submission never hangs noticeably longer than five seconds.
const SMTP_TIMEOUT: Duration = Duration::from_millis(5000);

/// Error kinds raised while deriving a [`TransportConfig`].
///
/// These are operator-facing diagnostics. They are logged server-side and
/// never shown to the end user.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SmtpConfigError {
    /// A required setting is absent or blank after trimming.
    #[error("{0} environment variable is required")]
    MissingVar(&'static str),

    /// `SMTP_PORT` is present but not a number.
    #[error("SMTP_PORT must be a valid number")]
    InvalidPort,
}

/// Validated configuration for one SMTP transport.
///
/// Built fresh for every send and discarded after the call completes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransportConfig {
    /// SMTP server host name or IP address.
    pub host: String,
    /// SMTP server port number.
    pub port: u16,
    /// Implicit TLS from the first byte. Derived: exactly port 465.
    pub secure: bool,
    /// Mandatory STARTTLS upgrade. Always the inverse of `secure`.
    pub require_tls: bool,
    /// Username for SMTP authentication, also the account address.
    pub user: String,
    /// Password for SMTP authentication.
    pub pass: String,
    /// Deadline for establishing the connection.
    pub connection_timeout: Duration,
    /// Deadline for socket reads and writes.
    pub socket_timeout: Duration,
    /// Deadline for the server greeting.
    pub greeting_timeout: Duration,
}

impl TransportConfig {
    /// Validates raw settings into a usable transport configuration.
    ///
    /// Presence is checked for all four values in the fixed order host,
    /// port, user, pass before the port string is parsed, so callers can
    /// rely on which error fires first when several settings are missing.
    ///
    /// # Errors
    /// - [`SmtpConfigError::MissingVar`] naming the first absent setting
    /// - [`SmtpConfigError::InvalidPort`] when the port does not parse
    pub fn from_settings(settings: &SmtpSettings) -> Result<Self, SmtpConfigError> {
        let host = require(&settings.host, "SMTP_HOST")?;
        let port_raw = require(&settings.port, "SMTP_PORT")?;
        let user = require(&settings.user, "SMTP_USER")?;
        let pass = require(&settings.pass, "SMTP_PASS")?;

        let port: u16 = port_raw
            .trim()
            .parse()
            .map_err(|_| SmtpConfigError::InvalidPort)?;

        // Port 465 is the one fixed special case for implicit TLS.
        let secure = port == 465;

        Ok(Self {
            host,
            port,
            secure,
            require_tls: !secure,
            user,
            pass,
            connection_timeout: SMTP_TIMEOUT,
            socket_timeout: SMTP_TIMEOUT,
            greeting_timeout: SMTP_TIMEOUT,
        })
    }
}

fn require(value: &Option<String>, name: &'static str) -> Result<String, SmtpConfigError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.clone()),
        _ => Err(SmtpConfigError::MissingVar(name)),
    }
}
