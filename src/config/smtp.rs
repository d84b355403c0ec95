//! # SMTP Environment Settings
//!
//! Captures the raw SMTP environment variables without validating them.
//! Validation happens later, when a transport is actually created, so the
//! application can boot and serve pages even with mail left unconfigured.
//!
//! # Environment Variables
//! | Variable | Description |
//! |-----------|-------------|
//! | `SMTP_HOST` | SMTP relay host name |
//! | `SMTP_PORT` | SMTP relay port (465 implies implicit TLS) |
//! | `SMTP_USER` | Account used for authentication and as sender/recipient |
//! | `SMTP_PASS` | Password for the account |

use std::env;

/// Raw SMTP settings as read from the environment.
///
/// Every field is optional here; completeness is checked by the transport
/// configuration, which reports each missing variable by name.
///
/// # Example
/// ```rust,no_run
/// use nefara_web::config::smtp::SmtpSettings;
///
/// let settings = SmtpSettings::from_env();
/// if settings.host.is_none() {
///     println!("mail is not configured");
/// }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SmtpSettings {
    /// SMTP relay host name, if set.
    pub host: Option<String>,
    /// SMTP relay port as the raw string, if set.
    pub port: Option<String>,
    /// SMTP account name, if set.
    pub user: Option<String>,
    /// SMTP account password, if set.
    pub pass: Option<String>,
}

impl SmtpSettings {
    /// Reads the four SMTP variables verbatim from the environment.
    pub fn from_env() -> Self {
        Self {
            host: env::var("SMTP_HOST").ok(),
            port: env::var("SMTP_PORT").ok(),
            user: env::var("SMTP_USER").ok(),
            pass: env::var("SMTP_PASS").ok(),
        }
    }
}
