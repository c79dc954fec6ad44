//! Axum router configuration for PayPal endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    capture_order, create_order, get_capture, get_order, receive_callback, refund_capture,
    PaymentAppState,
};

/// Create the PayPal API router, mounted at `/pp`.
///
/// # Routes
/// - `POST /orders` - Create order
/// - `POST /orders/:id/capture` - Capture order
/// - `GET /orders/:id` - Get order
/// - `GET /captures/:id` - Get capture
/// - `POST /captures/:id/refund` - Refund capture
/// - `POST /callback` - Webhook intake
pub fn paypal_router() -> Router<PaymentAppState> {
    Router::new()
        .route("/orders", post(create_order))
        .route("/orders/:id", get(get_order))
        .route("/orders/:id/capture", post(capture_order))
        .route("/captures/:id", get(get_capture))
        .route("/captures/:id/refund", post(refund_capture))
        .route("/callback", post(receive_callback))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::adapters::forwarding::ScriptedTransport;
    use crate::adapters::paypal::MockPaymentGateway;
    use crate::application::CallbackForwarder;
    use crate::domain::paypal::Order;
    use crate::ports::PaymentGateway;

    fn app(gateway: Option<MockPaymentGateway>) -> Router {
        let state = PaymentAppState {
            payment_gateway: gateway.map(|g| Arc::new(g) as Arc<dyn PaymentGateway>),
            forwarder: Arc::new(CallbackForwarder::new(Arc::new(
                ScriptedTransport::succeeding(),
            ))),
            callback_url: None,
        };
        paypal_router().with_state(state)
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn get_order_mirrors_gateway() {
        let gateway = MockPaymentGateway::new();
        gateway.set_order(
            serde_json::from_value::<Order>(serde_json::json!({
                "id": "ORDER-1",
                "status": "APPROVED"
            }))
            .unwrap(),
        );

        let response = app(Some(gateway.clone()))
            .oneshot(
                Request::builder()
                    .uri("/orders/ORDER-1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["id"], "ORDER-1");
        assert_eq!(body["status"], "APPROVED");
        assert_eq!(gateway.calls()[0].args, vec!["ORDER-1".to_string()]);
    }

    #[tokio::test]
    async fn blank_path_id_is_rejected() {
        let response = app(Some(MockPaymentGateway::new()))
            .oneshot(
                Request::builder()
                    .uri("/captures/%20")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], "capture_id is required");
    }

    #[tokio::test]
    async fn encoded_traversal_ids_are_rejected() {
        let gateway = MockPaymentGateway::new();
        let requests = [
            (Method::GET, "/orders/..%2F..%2F..%2Fv1%2Freporting%2Ftransactions"),
            (Method::GET, "/captures/.."),
            (Method::POST, "/orders/..%2F..%2Fv1%2Fpayments%2Fpayouts/capture"),
            (Method::POST, "/captures/CAP-1%3Fx%3D1/refund"),
        ];

        for (method, uri) in requests {
            let response = app(Some(gateway.clone()))
                .oneshot(
                    Request::builder()
                        .method(method)
                        .uri(uri)
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", uri);
            assert_eq!(body_json(response).await["error_code"], "VALIDATION_FAILED");
        }
        assert_eq!(gateway.call_count(), 0);
    }

    #[tokio::test]
    async fn missing_gateway_is_500() {
        let response = app(None)
            .oneshot(
                Request::builder()
                    .uri("/captures/CAP-1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["error"], "paypal client not found");
        assert_eq!(body["error_code"], "MISSING_DEPENDENCY");
    }
}
