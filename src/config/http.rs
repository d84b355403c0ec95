//! # HTTP Server Configuration
//!
//! Defines where the HTTP server binds. Typically included within
//! [`AppConfig`](crate::config::app::AppConfig).
//!
//! # Examples
//! ```rust
//! use nefara_web::config::http::HttpConfig;
//!
//! let http = HttpConfig {
//!     host: "127.0.0.1".into(),
//!     port: 8080,
//! };
//!
//! assert_eq!(http.bind_addr(), "127.0.0.1:8080");
//! ```

use std::env;

use crate::config::env::read_u16;

/// HTTP bind configuration.
///
/// # Example
/// ```rust
/// use nefara_web::config::http::HttpConfig;
///
/// let cfg = HttpConfig { host: "0.0.0.0".into(), port: 3001 };
/// assert_eq!(cfg.bind_addr(), "0.0.0.0:3001");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpConfig {
    pub host: String,
    pub port: u16,
}

impl HttpConfig {
    /// Loads the bind address from `HTTP_HOST` and `HTTP_PORT`.
    ///
    /// Defaults to `127.0.0.1:8080` when either variable is missing or
    /// does not parse.
    pub fn from_env() -> Self {
        Self {
            host: env::var("HTTP_HOST").unwrap_or_else(|_| "127.0.0.1".into()),
            port: read_u16("HTTP_PORT", 8080),
        }
    }

    /// Returns the `host:port` string passed to the TCP listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
