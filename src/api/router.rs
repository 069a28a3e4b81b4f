use std::path::PathBuf;

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};
use tower::limit::GlobalConcurrencyLimitLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use super::demo_keys;
use super::health;
use super::middleware::logging_middleware;
use super::state::AppState;
use crate::config::{ServerConfig, DEFAULT_BODY_LIMIT_BYTES};

/// Transport limits and extras applied to the router
#[derive(Debug, Clone)]
pub struct RouterOptions {
    pub body_limit_bytes: usize,
    pub max_concurrent_requests: usize,
    pub static_dir: Option<PathBuf>,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            body_limit_bytes: DEFAULT_BODY_LIMIT_BYTES,
            max_concurrent_requests: 256,
            static_dir: None,
        }
    }
}

impl From<&ServerConfig> for RouterOptions {
    fn from(config: &ServerConfig) -> Self {
        Self {
            body_limit_bytes: config.body_limit_bytes,
            max_concurrent_requests: config.max_concurrent_requests.max(1),
            static_dir: config.static_dir.clone(),
        }
    }
}

/// Create the full router with application state
pub fn create_router(state: AppState, options: RouterOptions) -> Router {
    let router = Router::new()
        .route("/health", get(health::health_check))
        .route("/live", get(health::live_check))
        .route(
            "/api/request-demo-key",
            post(demo_keys::request_demo_key)
                .layer(DefaultBodyLimit::max(options.body_limit_bytes)),
        )
        .with_state(state);

    let router = match options.static_dir {
        Some(dir) => router.fallback_service(ServeDir::new(dir)),
        None => router,
    };

    router
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(GlobalConcurrencyLimitLayer::new(options.max_concurrent_requests))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::domain::error::RemoteError;
    use crate::domain::issuance::MockControlPlane;
    use crate::domain::notification::{EmailMessage, MockEmailSender, NotificationDispatcher};
    use crate::domain::rate_limit::{MockRateLimiter, RateLimiter, DEFAULT_COOLDOWN};
    use crate::infrastructure::notification::{EmailDispatcher, InlineDispatcher};
    use crate::infrastructure::{DemoKeyService, InMemoryRateLimiter};

    fn control_plane_issuing_tokens() -> MockControlPlane {
        let mut control_plane = MockControlPlane::new();
        control_plane
            .expect_create_credential()
            .returning(|role, name| Ok(format!("tok_{}_{}", role, name.len())));
        control_plane
    }

    fn app_with(
        rate_limiter: Arc<dyn RateLimiter>,
        control_plane: MockControlPlane,
        dispatcher: Arc<dyn NotificationDispatcher>,
        options: RouterOptions,
    ) -> Router {
        let service = DemoKeyService::new(
            rate_limiter,
            Arc::new(control_plane),
            dispatcher,
            DEFAULT_COOLDOWN,
        );
        create_router(AppState::new(Arc::new(service)), options)
    }

    fn inline_app() -> Router {
        app_with(
            Arc::new(InMemoryRateLimiter::new()),
            control_plane_issuing_tokens(),
            Arc::new(InlineDispatcher::new()),
            RouterOptions::default(),
        )
    }

    fn demo_key_request(body: impl Into<Body>, ip: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/request-demo-key")
            .header(header::CONTENT_TYPE, "application/json")
            .header("x-forwarded-for", ip)
            .body(body.into())
            .unwrap()
    }

    fn email_request(email: &str, ip: &str) -> Request<Body> {
        demo_key_request(json!({ "email": email }).to_string(), ip)
    }

    async fn json_body(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = inline_app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await, json!({ "ok": true }));
    }

    #[tokio::test]
    async fn test_live() {
        let response = inline_app()
            .oneshot(Request::builder().uri("/live").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_inline_issue_then_rate_limited() {
        let app = inline_app();

        let first = app
            .clone()
            .oneshot(email_request(" USER@Example.com ", "203.0.113.1"))
            .await
            .unwrap();
        assert_eq!(first.status(), StatusCode::OK);

        let body = json_body(first).await;
        assert_eq!(body["ok"], json!(true));
        let ingest = body["ingest"].as_str().unwrap();
        let executor = body["executor"].as_str().unwrap();
        assert!(ingest.starts_with("tok_ingest_"));
        assert!(executor.starts_with("tok_executor_"));

        let second = app
            .oneshot(email_request("user@example.com", "198.51.100.9"))
            .await
            .unwrap();
        assert_eq!(second.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(
            json_body(second).await,
            json!({ "error": "Rate limited. Try again later." })
        );
    }

    #[tokio::test]
    async fn test_same_ip_different_email_is_rate_limited() {
        let app = inline_app();

        let first = app
            .clone()
            .oneshot(email_request("a@example.com", "203.0.113.1"))
            .await
            .unwrap();
        assert_eq!(first.status(), StatusCode::OK);

        let second = app
            .oneshot(email_request("b@example.com", "203.0.113.1"))
            .await
            .unwrap();
        assert_eq!(second.status(), StatusCode::TOO_MANY_REQUESTS);
    }

    #[tokio::test]
    async fn test_delivery_mode_success_hides_keys() {
        let mut sender = MockEmailSender::new();
        sender
            .expect_send()
            .withf(|message: &EmailMessage| message.to == "user@example.com")
            .times(1)
            .returning(|_| Ok(()));

        let app = app_with(
            Arc::new(InMemoryRateLimiter::new()),
            control_plane_issuing_tokens(),
            Arc::new(EmailDispatcher::new(Arc::new(sender), "https://cp", "Keys")),
            RouterOptions::default(),
        );

        let response = app
            .oneshot(email_request("User@Example.com", "203.0.113.1"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await, json!({ "ok": true }));
    }

    #[tokio::test]
    async fn test_delivery_failure_returns_generic_500() {
        let mut sender = MockEmailSender::new();
        sender
            .expect_send()
            .times(1)
            .returning(|_| Err(RemoteError::rejected("email", 503, "provider unavailable")));

        let app = app_with(
            Arc::new(InMemoryRateLimiter::new()),
            control_plane_issuing_tokens(),
            Arc::new(EmailDispatcher::new(Arc::new(sender), "https://cp", "Keys")),
            RouterOptions::default(),
        );

        let response = app
            .oneshot(email_request("user@example.com", "203.0.113.1"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            json_body(response).await,
            json!({ "error": "Unable to issue demo key" })
        );
    }

    #[tokio::test]
    async fn test_issuance_failure_returns_generic_500() {
        let mut control_plane = MockControlPlane::new();
        control_plane
            .expect_create_credential()
            .times(1)
            .returning(|_, _| Err(RemoteError::rejected("control_plane", 401, "secret detail")));

        let app = app_with(
            Arc::new(InMemoryRateLimiter::new()),
            control_plane,
            Arc::new(InlineDispatcher::new()),
            RouterOptions::default(),
        );

        let response = app
            .oneshot(email_request("user@example.com", "203.0.113.1"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = json_body(response).await;
        assert_eq!(body, json!({ "error": "Unable to issue demo key" }));
        assert!(!body.to_string().contains("secret detail"));
    }

    fn untouched_app(options: RouterOptions) -> Router {
        let mut rate_limiter = MockRateLimiter::new();
        rate_limiter.expect_check_and_record().never();
        let mut control_plane = MockControlPlane::new();
        control_plane.expect_create_credential().never();

        app_with(
            Arc::new(rate_limiter),
            control_plane,
            Arc::new(InlineDispatcher::new()),
            options,
        )
    }

    #[tokio::test]
    async fn test_invalid_emails_are_rejected_before_rate_limiting() {
        for email in ["", "not-an-email", "user@", "user@localhost"] {
            let response = untouched_app(RouterOptions::default())
                .oneshot(email_request(email, "203.0.113.1"))
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{email:?}");
            assert_eq!(
                json_body(response).await,
                json!({ "error": "Invalid email address" })
            );
        }
    }

    #[tokio::test]
    async fn test_missing_email_field_is_invalid() {
        let response = untouched_app(RouterOptions::default())
            .oneshot(demo_key_request("{}", "203.0.113.1"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_malformed_json_is_invalid() {
        let response = untouched_app(RouterOptions::default())
            .oneshot(demo_key_request("{\"email\":", "203.0.113.1"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(response).await,
            json!({ "error": "Invalid email address" })
        );
    }

    #[tokio::test]
    async fn test_oversized_body_is_rejected_before_validation() {
        let options = RouterOptions {
            body_limit_bytes: 64,
            ..RouterOptions::default()
        };
        let padding = "x".repeat(200);
        let body = json!({ "email": "user@example.com", "padding": padding }).to_string();

        let response = untouched_app(options)
            .oneshot(demo_key_request(body, "203.0.113.1"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(response).await,
            json!({ "error": "Invalid email address" })
        );
    }

    #[tokio::test]
    async fn test_missing_forwarded_header_uses_unknown_sentinel() {
        let mut rate_limiter = MockRateLimiter::new();
        rate_limiter
            .expect_check_and_record()
            .withf(|email, ip, _| email == "user@example.com" && ip == "unknown")
            .times(1)
            .returning(|_, _, _| crate::domain::RateLimitDecision::Allowed);

        let app = app_with(
            Arc::new(rate_limiter),
            control_plane_issuing_tokens(),
            Arc::new(InlineDispatcher::new()),
            RouterOptions::default(),
        );

        let request = Request::builder()
            .method("POST")
            .uri("/api/request-demo-key")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({ "email": "user@example.com" }).to_string()))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
