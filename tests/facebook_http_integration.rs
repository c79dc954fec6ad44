//! Integration tests for the Facebook login routes.

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::Router;
use http::{header, Method, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use outside_api::adapters::forwarding::ScriptedTransport;
use outside_api::adapters::http::{app_router, PaymentAppState, RouterOptions, SocialAppState};
use outside_api::adapters::MockSocialLogin;
use outside_api::application::CallbackForwarder;
use outside_api::domain::social::SocialProfile;
use outside_api::ports::{OAuthError, SocialLogin};

const DOWNSTREAM: &str = "http://downstream.test/facebook";

// =============================================================================
// Test Infrastructure
// =============================================================================

struct TestApp {
    router: Router,
    forwarder: Arc<CallbackForwarder>,
    transport: ScriptedTransport,
}

fn mock_login() -> MockSocialLogin {
    MockSocialLogin::new(
        "EAAB-token",
        SocialProfile {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
        },
    )
}

fn test_app(social_login: Option<MockSocialLogin>, callback_url: Option<&str>) -> TestApp {
    let transport = ScriptedTransport::succeeding();
    let forwarder = Arc::new(CallbackForwarder::new(Arc::new(transport.clone())));
    let payment = PaymentAppState {
        payment_gateway: None,
        forwarder: forwarder.clone(),
        callback_url: None,
    };
    let social = SocialAppState {
        social_login: social_login.map(|s| Arc::new(s) as Arc<dyn SocialLogin>),
        forwarder: forwarder.clone(),
        callback_url: callback_url.map(str::to_string),
    };
    TestApp {
        router: app_router(payment, social, RouterOptions::default()),
        forwarder,
        transport,
    }
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// =============================================================================
// Login
// =============================================================================

#[tokio::test]
async fn login_returns_url_with_matching_state() {
    let app = test_app(Some(mock_login()), None);

    let response = app.router.oneshot(get("/fb/login")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let state = body["state"].as_str().unwrap();
    assert_eq!(state.len(), 24);
    assert!(body["url"]
        .as_str()
        .unwrap()
        .ends_with(&format!("state={}", state)));
}

#[tokio::test]
async fn login_states_differ_between_requests() {
    let app = test_app(Some(mock_login()), None);

    let first = body_json(app.router.clone().oneshot(get("/fb/login")).await.unwrap()).await;
    let second = body_json(app.router.oneshot(get("/fb/login")).await.unwrap()).await;

    assert_ne!(first["state"], second["state"]);
}

#[tokio::test]
async fn login_without_config_is_500() {
    let app = test_app(None, None);

    let response = app.router.oneshot(get("/fb/login")).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await["error"], "facebook config not found");
}

// =============================================================================
// Callback
// =============================================================================

#[tokio::test]
async fn callback_with_query_code_returns_profile_and_relays_once() {
    let social = mock_login();
    let app = test_app(Some(social.clone()), Some(DOWNSTREAM));

    let response = app
        .router
        .oneshot(get("/fb/callback?code=AQD-code&state=abc"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let expected = json!({
        "access_token": "EAAB-token",
        "name": "Ada Lovelace",
        "email": "ada@example.com"
    });
    assert_eq!(body_json(response).await, expected);
    assert_eq!(social.exchanged_codes(), vec!["AQD-code".to_string()]);
    assert_eq!(social.profile_tokens(), vec!["EAAB-token".to_string()]);

    assert!(app.forwarder.shutdown(Duration::from_secs(5)).await);
    let attempts = app.transport.attempts();
    assert_eq!(attempts.len(), 1);
    assert_eq!(attempts[0].url, DOWNSTREAM);
    let relayed: Value = serde_json::from_slice(&attempts[0].payload).unwrap();
    assert_eq!(relayed, expected);
}

#[tokio::test]
async fn callback_reads_code_from_json_body() {
    let social = mock_login();
    let app = test_app(Some(social.clone()), None);

    let response = app
        .router
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/fb/callback")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"code":"AQD-body","state":"xyz"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["email"], "ada@example.com");
    assert_eq!(social.exchanged_codes(), vec!["AQD-body".to_string()]);
    assert_eq!(app.forwarder.in_flight(), 0);
}

#[tokio::test]
async fn callback_without_code_is_400() {
    let social = mock_login();
    let app = test_app(Some(social.clone()), Some(DOWNSTREAM));

    let response = app
        .router
        .oneshot(get("/fb/callback?state=abc"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "code is required");
    assert!(social.exchanged_codes().is_empty());
    assert_eq!(app.transport.attempt_count(), 0);
}

#[tokio::test]
async fn callback_without_config_is_500() {
    let app = test_app(None, Some(DOWNSTREAM));

    let response = app
        .router
        .oneshot(get("/fb/callback?code=AQD-code"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await["error_code"], "MISSING_DEPENDENCY");
}

#[tokio::test]
async fn rejected_code_is_400_and_not_relayed() {
    let social = mock_login();
    social.fail_exchange(OAuthError::TokenExchange {
        status: Some(400),
        message: "This authorization code has been used.".to_string(),
    });
    let app = test_app(Some(social), Some(DOWNSTREAM));

    let response = app
        .router
        .oneshot(get("/fb/callback?code=reused"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response).await["error"]
        .as_str()
        .unwrap()
        .starts_with("failed to exchange token"));
    assert_eq!(app.transport.attempt_count(), 0);
}

#[tokio::test]
async fn profile_failure_is_500() {
    let social = mock_login();
    social.fail_profile(OAuthError::Profile("Invalid OAuth access token.".to_string()));
    let app = test_app(Some(social), Some(DOWNSTREAM));

    let response = app
        .router
        .oneshot(get("/fb/callback?code=AQD-code"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(app.transport.attempt_count(), 0);
}
