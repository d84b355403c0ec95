//! # Public Site Configuration
//!
//! Holds the values the site exposes to visitors: the canonical client
//! origin and the published contact coordinates. Everything is run through
//! the validators at load time, so the rest of the application can treat
//! these fields as already sanitized.
//!
//! # Environment Variables
//! | Variable | Description | Default |
//! |-----------|-------------|----------|
//! | `CLIENT_URL` | Public origin of the site frontend | `http://localhost:3000` |
//! | `CONTACT_EMAIL` | Published contact address | *empty* |
//! | `CONTACT_PHONE` | Published contact phone | *empty* |

use std::env;

use crate::validate::{
    email::validate_email_address, phone::validate_phone_number, url::validate_client_url,
};

/// Sanitized site-facing configuration.
///
/// Invalid or missing contact values load as empty strings rather than
/// errors; the site simply renders without that contact channel.
///
/// # Example
/// ```rust,no_run
/// use nefara_web::config::site::SiteConfig;
///
/// let site = SiteConfig::from_env();
/// assert!(site.client_url.starts_with("http"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    /// Validated client origin, never empty.
    pub client_url: String,
    /// Validated contact address, empty when unset or malformed.
    pub contact_email: String,
    /// Validated contact phone, empty when unset or malformed.
    pub contact_phone: String,
}

impl SiteConfig {
    /// Loads and sanitizes the site values from the environment.
    pub fn from_env() -> Self {
        Self {
            client_url: validate_client_url(env::var("CLIENT_URL").ok().as_deref()),
            contact_email: validate_email_address(env::var("CONTACT_EMAIL").ok().as_deref())
                .unwrap_or_default(),
            contact_phone: validate_phone_number(env::var("CONTACT_PHONE").ok().as_deref())
                .unwrap_or_default(),
        }
    }
}
