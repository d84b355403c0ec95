//! # Environment Variable Utilities
//!
//! Provides helpers for reading environment variables with common type conversions.
//! Includes parsing for numeric values with fallback defaults.
//!
//! These functions are typically used in configuration loading (e.g. `AppConfig`).
//!
//! # Examples
//! ```rust,no_run
//! use nefara_web::config::env::read_u16;
//!
//! let port = read_u16("HTTP_PORT", 8080);
//! ```

/// Reads an unsigned integer (`u16`) from an environment variable,
/// returning the provided default if the variable is missing or does
/// not parse.
///
/// # Example
/// ```rust,no_run
/// use nefara_web::config::env::read_u16;
///
/// let port = read_u16("HTTP_PORT", 8080);
/// ```
pub fn read_u16(name: &str, default: u16) -> u16 {
    read_u16_from(|k| std::env::var(k).ok(), name, default)
}

/// Reads a `u16` using a custom provider function.
///
/// Useful for testing or mocking environment sources.
///
/// # Example
/// ```rust
/// use nefara_web::config::env::read_u16_from;
///
/// let port = read_u16_from(|_| Some("3001".into()), "HTTP_PORT", 8080);
/// assert_eq!(port, 3001);
/// ```
pub fn read_u16_from<F>(provider: F, name: &str, default: u16) -> u16
where
    F: Fn(&str) -> Option<String>,
{
    provider(name)
        .and_then(|s| s.trim().parse::<u16>().ok())
        .unwrap_or(default)
}
