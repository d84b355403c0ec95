//! # Application Router
//!
//! Wires the full API surface: the contact pipeline behind its rate
//! limit, the public site values, the JSON fallback and CORS for the
//! configured client origin.
//!
//! # Example
//! ```rust,no_run
//! use nefara_web::config::app::AppConfig;
//! use nefara_web::web::router::build_router;
//!
//! let config = AppConfig::from_env();
//! let app = build_router(&config);
//! # let _ = app;
//! ```

use std::sync::Arc;

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Extension, Router,
};

use crate::config::app::AppConfig;
use crate::contact::service::ContactService;
use crate::mail::smtp::transport::SmtpTransportFactory;
use crate::web::{
    contact::contact_handler,
    cors::build_cors,
    fallback::not_found,
    rate_limit::{rate_limit_middleware, RateLimiter},
    site::site_handler,
};

/// Builds the application router from loaded configuration.
///
/// ## Behavior
/// - `POST /api/contact` runs the contact pipeline, guarded by the
///   per-address rate limit. The limit applies to this route alone.
/// - `GET /api/site` serves the sanitized public site values.
/// - Anything else answers the JSON 404 fallback.
///
/// The router must be served with connect info so the rate limit can see
/// client addresses.
pub fn build_router(config: &AppConfig) -> Router {
    let factory = SmtpTransportFactory::new(config.smtp.clone());
    let contact_service = Arc::new(ContactService::new(Arc::new(factory)));
    let site = Arc::new(config.site.clone());
    let limiter = RateLimiter::default();

    Router::new()
        .route(
            "/api/contact",
            post(contact_handler).layer(from_fn_with_state(limiter, rate_limit_middleware)),
        )
        .route("/api/site", get(site_handler))
        .fallback(not_found)
        .layer(Extension(contact_service))
        .layer(Extension(site))
        .layer(build_cors(&config.site))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::SocketAddr;

    use axum::{
        body::{to_bytes, Body},
        extract::ConnectInfo,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    fn test_config() -> AppConfig {
        temp_env::with_vars(
            vec![
                ("CLIENT_URL", Some("https://nefara.com")),
                ("CONTACT_EMAIL", Some("office@nefara.com")),
                ("CONTACT_PHONE", Some("+359887383000")),
                // No relay configured; transport creation fails downstream.
                ("SMTP_HOST", None),
                ("SMTP_PORT", None),
                ("SMTP_USER", None),
                ("SMTP_PASS", None),
            ],
            AppConfig::from_env,
        )
    }

    fn contact_request(body: &str) -> Request<Body> {
        let mut req = Request::builder()
            .method("POST")
            .uri("/api/contact")
            .header("content-type", "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap();
        req.extensions_mut()
            .insert(ConnectInfo(SocketAddr::from(([127, 0, 0, 1], 4000))));
        req
    }

    async fn json_body(res: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn contact_route_reports_failure_when_mail_is_unconfigured() {
        let app = build_router(&test_config());

        let res = app
            .oneshot(contact_request(
                "email=user%40example.com&subject=Hi&message=Test",
            ))
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        let body = json_body(res).await;
        assert_eq!(body["success"], serde_json::json!(false));
        assert_eq!(
            body["error"],
            serde_json::json!("Something went wrong. Please try again.")
        );
    }

    #[tokio::test]
    async fn site_route_serves_the_sanitized_values() {
        let app = build_router(&test_config());

        let res = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/site")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        let body = json_body(res).await;
        assert_eq!(body["client_url"], "https://nefara.com");
        assert_eq!(body["phone_display"], "+359 88 738 3000");
        assert_eq!(body["mailto"], "mailto:office%40nefara.com");
    }

    #[tokio::test]
    async fn unknown_routes_answer_the_json_fallback() {
        let app = build_router(&test_config());

        let res = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/unknown")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let body = json_body(res).await;
        assert_eq!(body, serde_json::json!({ "error": "Not found" }));
    }

    #[tokio::test]
    async fn rate_limit_guards_the_contact_route_only() {
        let app = build_router(&test_config());

        for i in 1..=10 {
            let res = app
                .clone()
                .oneshot(contact_request("email=not-an-email&message=Test"))
                .await
                .unwrap();
            assert_eq!(res.status(), StatusCode::OK, "request {i} should pass");
        }

        let res = app
            .clone()
            .oneshot(contact_request("email=not-an-email&message=Test"))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::TOO_MANY_REQUESTS);

        // The site route stays reachable for the same address.
        let res = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/site")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn preflight_allows_the_configured_client_origin() {
        let app = build_router(&test_config());

        let res = app
            .oneshot(
                Request::builder()
                    .method("OPTIONS")
                    .uri("/api/contact")
                    .header("Origin", "https://nefara.com")
                    .header("Access-Control-Request-Method", "POST")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(
            matches!(res.status(), StatusCode::NO_CONTENT | StatusCode::OK),
            "unexpected status: {}",
            res.status()
        );
        assert_eq!(
            res.headers()
                .get("access-control-allow-origin")
                .unwrap()
                .to_str()
                .unwrap(),
            "https://nefara.com"
        );
    }
}
