//! # Per-Address Rate Limiting
//!
//! Shields the contact endpoint from bursts: each client address gets a
//! fixed quota of requests per rolling window, counted in memory. Once
//! the quota is spent, further requests are answered with
//! `429 Too Many Requests` until the window elapses.
//!
//! The state is a plain map behind a mutex, shared by cloning
//! [`RateLimiter`] into the middleware. Entries are reused per address;
//! the map grows with the number of distinct addresses seen.

use std::collections::HashMap;
use std::net::{IpAddr, SocketAddr};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use axum::{
    extract::{ConnectInfo, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};

/// Requests allowed per address within one window.
const MAX_REQUESTS: u32 = 10;

/// Length of the counting window.
const TIME_WINDOW: Duration = Duration::from_secs(60);

struct Window {
    started: Instant,
    count: u32,
}

/// Shared request counter keyed by client address.
///
/// Cloning is cheap and every clone counts against the same state.
#[derive(Clone, Default)]
pub struct RateLimiter {
    windows: Arc<Mutex<HashMap<IpAddr, Window>>>,
}

impl RateLimiter {
    /// Records one request from `ip` and reports whether it fits the quota.
    pub fn allow(&self, ip: IpAddr) -> bool {
        self.allow_at(ip, Instant::now())
    }

    /// Clock-injected form of [`allow`](Self::allow) so window edges can
    /// be tested without sleeping.
    fn allow_at(&self, ip: IpAddr, now: Instant) -> bool {
        let mut windows = self.windows.lock().unwrap_or_else(|e| e.into_inner());
        let window = windows
            .entry(ip)
            .or_insert_with(|| Window { started: now, count: 0 });

        // The window resets only once it has fully elapsed; a request at
        // the exact boundary still counts against the old window.
        if now.duration_since(window.started) > TIME_WINDOW {
            window.started = now;
            window.count = 0;
        }

        window.count += 1;
        window.count <= MAX_REQUESTS
    }
}

/// Axum middleware enforcing the per-address quota.
///
/// Requires the router to be served with connect info so the client
/// address is available. Rejected requests never reach the inner handler.
pub async fn rate_limit_middleware(
    State(limiter): State<RateLimiter>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    req: Request,
    next: Next,
) -> Response {
    if limiter.allow(addr.ip()) {
        next.run(req).await
    } else {
        (StatusCode::TOO_MANY_REQUESTS, "Too many requests").into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        middleware::from_fn_with_state,
        routing::post,
        Router,
    };
    use tower::ServiceExt;

    fn ip(last: u8) -> IpAddr {
        IpAddr::from([192, 168, 0, last])
    }

    #[test]
    fn allows_up_to_the_quota_within_one_window() {
        let limiter = RateLimiter::default();
        let t0 = Instant::now();

        for i in 1..=MAX_REQUESTS {
            assert!(
                limiter.allow_at(ip(1), t0 + Duration::from_secs(i as u64)),
                "request {i} should pass"
            );
        }
        assert!(!limiter.allow_at(ip(1), t0 + Duration::from_secs(11)));
        assert!(!limiter.allow_at(ip(1), t0 + Duration::from_secs(12)));
    }

    #[test]
    fn tracks_addresses_independently() {
        let limiter = RateLimiter::default();
        let t0 = Instant::now();

        for _ in 0..MAX_REQUESTS {
            limiter.allow_at(ip(1), t0);
        }
        assert!(!limiter.allow_at(ip(1), t0));
        assert!(limiter.allow_at(ip(2), t0));
    }

    #[test]
    fn window_resets_only_after_it_fully_elapses() {
        let limiter = RateLimiter::default();
        let t0 = Instant::now();

        for _ in 0..=MAX_REQUESTS {
            limiter.allow_at(ip(1), t0);
        }

        // Exactly at the boundary the old window still applies.
        assert!(!limiter.allow_at(ip(1), t0 + TIME_WINDOW));
        // Past it, the counter starts over.
        assert!(limiter.allow_at(ip(1), t0 + TIME_WINDOW + Duration::from_millis(1)));
    }

    #[tokio::test]
    async fn middleware_rejects_the_request_after_the_quota() {
        let limiter = RateLimiter::default();
        let app = Router::new()
            .route("/api/contact", post(|| async { "ok" }))
            .layer(from_fn_with_state(limiter, rate_limit_middleware));

        let addr = SocketAddr::from(([127, 0, 0, 1], 4000));

        for i in 1..=MAX_REQUESTS {
            let mut req = Request::builder()
                .method("POST")
                .uri("/api/contact")
                .body(Body::empty())
                .unwrap();
            req.extensions_mut().insert(ConnectInfo(addr));

            let res = app.clone().oneshot(req).await.unwrap();
            assert_eq!(res.status(), StatusCode::OK, "request {i} should pass");
        }

        let mut req = Request::builder()
            .method("POST")
            .uri("/api/contact")
            .body(Body::empty())
            .unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));

        let res = app.oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::TOO_MANY_REQUESTS);
        let body = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"Too many requests");
    }
}
