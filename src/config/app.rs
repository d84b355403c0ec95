//! # Application Configuration Loader
//!
//! Provides a unified configuration loader for application settings,
//! covering the HTTP bind address, the SMTP relay and the public site
//! values.
//!
//! Automatically loads `.env` files for non-production environments.
//! It checks for a custom `DOTENV_FILE` path first, then falls back to
//! `.env.{APP_ENV}` or `.env`.
//!
//! This configuration is typically initialized once at application startup
//! and shared throughout the system.
//!
//! # Environment Variables
//! | Variable | Description | Default |
//! |-----------|-------------|----------|
//! | `APP_ENV` | Current environment (`development`, `production`, etc.) | `"development"` |
//! | `DOTENV_FILE` | Optional path to a custom dotenv file | *none* |
//! | `HTTP_HOST` | Interface the server binds to | `"127.0.0.1"` |
//! | `HTTP_PORT` | Port the server binds to | `8080` |
//! | `SMTP_HOST` | SMTP relay host | *none* |
//! | `SMTP_PORT` | SMTP relay port | *none* |
//! | `SMTP_USER` | SMTP account, also sender and recipient | *none* |
//! | `SMTP_PASS` | SMTP password | *none* |
//! | `CLIENT_URL` | Public origin of the site frontend | `http://localhost:3000` |
//! | `CONTACT_EMAIL` | Published contact address | *empty* |
//! | `CONTACT_PHONE` | Published contact phone | *empty* |
//!
//! # Example
//! ```rust,no_run
//! use nefara_web::config::app::AppConfig;
//!
//! let cfg = AppConfig::from_env();
//! println!("binding on {}", cfg.http.bind_addr());
//! ```

use std::env;

use crate::config::{http::HttpConfig, site::SiteConfig, smtp::SmtpSettings};

/// Top-level application configuration.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// HTTP server configuration.
    pub http: HttpConfig,
    /// Raw SMTP relay settings, validated at transport creation.
    pub smtp: SmtpSettings,
    /// Sanitized public site values.
    pub site: SiteConfig,
}

impl AppConfig {
    /// Loads application configuration from environment variables.
    ///
    /// ## Behavior
    /// - Reads `APP_ENV` (defaults to `"development"`).
    /// - Loads `.env` or `.env.{APP_ENV}` for non-production environments.
    /// - Parses all supported environment variables and falls back to defaults.
    ///
    /// # Example
    /// ```rust,no_run
    /// use nefara_web::config::app::AppConfig;
    ///
    /// let cfg = AppConfig::from_env();
    /// assert!(!cfg.site.client_url.is_empty());
    /// ```
    pub fn from_env() -> Self {
        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "development".into());

        if app_env != "production" {
            if let Ok(path) = env::var("DOTENV_FILE") {
                let _ = dotenvy::from_filename(path);
            } else {
                let candidate = format!(".env.{}", app_env);
                dotenvy::from_filename(&candidate)
                    .or_else(|_| dotenvy::dotenv())
                    .ok();
            }
        }

        AppConfig {
            http: HttpConfig::from_env(),
            smtp: SmtpSettings::from_env(),
            site: SiteConfig::from_env(),
        }
    }
}
