//! # CORS (Cross-Origin Resource Sharing) Utilities
//!
//! Provides a configurable [`CorsLayer`] builder for Axum applications.
//!
//! The API is consumed by exactly one browser origin, the public site
//! frontend, so the layer allows that single origin from
//! [`SiteConfig`](crate::config::site::SiteConfig) and nothing else.
//!
//! # Example
//! ```rust,no_run
//! use axum::{routing::get, Router};
//! use nefara_web::config::site::SiteConfig;
//! use nefara_web::web::cors::build_cors;
//!
//! let site = SiteConfig {
//!     client_url: "https://nefara.com".into(),
//!     contact_email: "office@nefara.com".into(),
//!     contact_phone: "+359887383000".into(),
//! };
//!
//! let app: Router = Router::new()
//!     .route("/api/site", get(|| async { "ok" }))
//!     .layer(build_cors(&site));
//! ```

use axum::http::{header, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::config::site::SiteConfig;
use crate::validate::url::DEFAULT_CLIENT_URL;

/// Builds a [`CorsLayer`] allowing the configured client origin.
///
/// - Allows `GET`, `POST`, and `OPTIONS` methods.
/// - Allows the `Content-Type` header so forms and JSON go through.
/// - Allows only the origin in `SiteConfig.client_url`.
///
/// # Example
/// ```rust,no_run
/// use nefara_web::config::site::SiteConfig;
/// use nefara_web::web::cors::build_cors;
///
/// let site = SiteConfig {
///     client_url: "https://nefara.com".into(),
///     contact_email: String::new(),
///     contact_phone: String::new(),
/// };
/// let layer = build_cors(&site);
/// ```
pub fn build_cors(site: &SiteConfig) -> CorsLayer {
    // The validated URL can still hold characters a header cannot carry
    // (an internationalized host, for one), so fall back to the default
    // origin instead of panicking.
    let origin = HeaderValue::from_str(&site.client_url)
        .unwrap_or_else(|_| HeaderValue::from_static(DEFAULT_CLIENT_URL));

    CorsLayer::new()
        .allow_origin(AllowOrigin::list([origin]))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}
