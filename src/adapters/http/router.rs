//! Top-level router: integration routers, health check and middleware.

use std::time::Duration;

use axum::extract::State;
use axum::http::header::{ACCEPT, CONTENT_TYPE};
use axum::http::{HeaderName, HeaderValue, Method};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use super::facebook::{facebook_router, SocialAppState};
use super::paypal::{paypal_router, PaymentAppState};

/// Body of `GET /healthz`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub paypal: bool,
    pub facebook: bool,
}

#[derive(Clone, Copy)]
struct HealthState {
    paypal: bool,
    facebook: bool,
}

async fn healthz(State(health): State<HealthState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        paypal: health.paypal,
        facebook: health.facebook,
    })
}

/// Middleware settings for `app_router`.
#[derive(Debug, Clone, Default)]
pub struct RouterOptions {
    pub request_timeout: Option<Duration>,
    /// `None` leaves CORS off. `*` allows any origin.
    pub cors_origins: Option<Vec<String>>,
}

/// Assemble the service.
///
/// # Routes
/// - `/pp/...` - PayPal proxy
/// - `/fb/...` - Facebook login
/// - `GET /healthz` - Which integrations are enabled
pub fn app_router(payment: PaymentAppState, social: SocialAppState, options: RouterOptions) -> Router {
    let health = HealthState {
        paypal: payment.payment_gateway.is_some(),
        facebook: social.social_login.is_some(),
    };

    let mut router = Router::new()
        .route("/healthz", get(healthz))
        .with_state(health)
        .nest("/pp", paypal_router().with_state(payment))
        .nest("/fb", facebook_router().with_state(social));

    if let Some(timeout) = options.request_timeout {
        router = router.layer(TimeoutLayer::new(timeout));
    }
    if let Some(origins) = options.cors_origins.as_deref() {
        router = router.layer(cors_layer(origins));
    }

    let x_request_id = HeaderName::from_static("x-request-id");
    router.layer(
        ServiceBuilder::new()
            .layer(SetRequestIdLayer::new(x_request_id.clone(), MakeRequestUuid))
            .layer(TraceLayer::new_for_http())
            .layer(PropagateRequestIdLayer::new(x_request_id)),
    )
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.iter().any(|origin| origin == "*") {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(
            origins
                .iter()
                .filter_map(|origin| origin.parse::<HeaderValue>().ok())
                .collect::<Vec<_>>(),
        )
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([ACCEPT, CONTENT_TYPE])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::adapters::forwarding::ScriptedTransport;
    use crate::adapters::paypal::MockPaymentGateway;
    use crate::application::CallbackForwarder;
    use crate::ports::PaymentGateway;

    fn app(options: RouterOptions) -> Router {
        let forwarder = Arc::new(CallbackForwarder::new(Arc::new(
            ScriptedTransport::succeeding(),
        )));
        let payment = PaymentAppState {
            payment_gateway: Some(Arc::new(MockPaymentGateway::new()) as Arc<dyn PaymentGateway>),
            forwarder: forwarder.clone(),
            callback_url: None,
        };
        let social = SocialAppState {
            social_login: None,
            forwarder,
            callback_url: None,
        };
        app_router(payment, social, options)
    }

    #[tokio::test]
    async fn healthz_reports_enabled_integrations() {
        let response = app(RouterOptions::default())
            .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key("x-request-id"));
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "status": "ok", "paypal": true, "facebook": false })
        );
    }

    #[tokio::test]
    async fn request_id_is_propagated() {
        let response = app(RouterOptions::default())
            .oneshot(
                Request::builder()
                    .uri("/healthz")
                    .header("x-request-id", "req-42")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.headers()["x-request-id"], "req-42");
    }

    #[tokio::test]
    async fn cors_allows_configured_origin() {
        let response = app(RouterOptions {
            request_timeout: Some(Duration::from_secs(30)),
            cors_origins: Some(vec!["https://shop.example.com".to_string()]),
        })
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/pp/orders")
                .header("origin", "https://shop.example.com")
                .header("access-control-request-method", "POST")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

        assert_eq!(
            response.headers()["access-control-allow-origin"],
            "https://shop.example.com"
        );
    }
}
