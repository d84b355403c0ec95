//! # nefara_web
//!
//! Backend for the Nefara marketing site.
//!
//! This crate provides the contact pipeline and the small API around it:
//! - Contact form validation and dispatch over SMTP (`contact`, `mail`)
//! - Input validators and output escapers (`validate`, `escape`)
//! - Environment-driven configuration (`config`)
//! - The Axum router, CORS and rate limiting (`web`)
//!
//! ## Example usage (in another crate)
//!
//! ```rust,no_run
//! use nefara_web::config::app::AppConfig;
//! use nefara_web::web::router::build_router;
//!
//! let app = build_router(&AppConfig::from_env());
//! # let _ = app;
//! ```

// ===============================
// Re-exports of external crates
// ===============================

pub use anyhow;
pub use axum;
pub use dotenvy;
pub use serde;
pub use serde_json;
pub use tokio;
pub use tower;
pub use tower_http;

// ===============================
// Public modules
// ===============================
pub mod config;
pub mod contact;
pub mod escape;
pub mod mail;
pub mod validate;
pub mod web;
