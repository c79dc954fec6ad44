//! HTTP handlers for PayPal endpoints.
//!
//! Order lifecycle calls go straight to the `PaymentGateway` and mirror its
//! answer. Webhooks go through the application layer so they can be relayed.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::{Map, Value};

use crate::application::handlers::{ReceivePaymentCallbackCommand, ReceivePaymentCallbackHandler};
use crate::application::CallbackForwarder;
use crate::domain::foundation::DomainError;
use crate::domain::paypal::{
    is_resource_id, CaptureOrderRequest, CreateOrderRequest, RefundCaptureRequest,
};
use crate::ports::PaymentGateway;

use super::super::error::ApiError;
use super::super::extract::{JsonBody, OptionalJsonBody};
use super::dto::CallbackAccepted;

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for the payment routes.
///
/// `payment_gateway` is `None` when PayPal credentials are absent or were
/// rejected at startup.
#[derive(Clone)]
pub struct PaymentAppState {
    pub payment_gateway: Option<Arc<dyn PaymentGateway>>,
    pub forwarder: Arc<CallbackForwarder>,
    pub callback_url: Option<String>,
}

impl PaymentAppState {
    fn gateway(&self) -> Result<&Arc<dyn PaymentGateway>, ApiError> {
        self.payment_gateway
            .as_ref()
            .ok_or_else(|| DomainError::missing_dependency("paypal client not found").into())
    }

    pub fn callback_handler(&self) -> ReceivePaymentCallbackHandler {
        ReceivePaymentCallbackHandler::new(self.forwarder.clone(), self.callback_url.clone())
    }
}

fn require_id(raw: String, field: &'static str) -> Result<String, ApiError> {
    let id = raw.trim();
    if id.is_empty() {
        return Err(DomainError::validation(field, format!("{} is required", field)).into());
    }
    if !is_resource_id(id) {
        return Err(DomainError::validation(
            field,
            format!("{} must contain only letters, digits, '-' or '_'", field),
        )
        .into());
    }
    Ok(id.to_string())
}

// ════════════════════════════════════════════════════════════════════════════════
// Orders
// ════════════════════════════════════════════════════════════════════════════════

/// POST /pp/orders - Create an order with CAPTURE intent
pub async fn create_order(
    State(state): State<PaymentAppState>,
    JsonBody(request): JsonBody<CreateOrderRequest>,
) -> Result<impl IntoResponse, ApiError> {
    request
        .validate()
        .map_err(|message| DomainError::validation("purchase_units", message))?;

    let order = state.gateway()?.create_order(request).await?;
    Ok(Json(order))
}

/// POST /pp/orders/:id/capture - Capture an approved order
pub async fn capture_order(
    State(state): State<PaymentAppState>,
    Path(order_id): Path<String>,
    OptionalJsonBody(request): OptionalJsonBody<CaptureOrderRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let order_id = require_id(order_id, "order_id")?;
    let captured = state.gateway()?.capture_order(&order_id, request).await?;
    Ok(Json(captured))
}

/// GET /pp/orders/:id - Order details
pub async fn get_order(
    State(state): State<PaymentAppState>,
    Path(order_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let order_id = require_id(order_id, "order_id")?;
    let order = state.gateway()?.get_order(&order_id).await?;
    Ok(Json(order))
}

// ════════════════════════════════════════════════════════════════════════════════
// Captures
// ════════════════════════════════════════════════════════════════════════════════

/// GET /pp/captures/:id - Captured payment details
pub async fn get_capture(
    State(state): State<PaymentAppState>,
    Path(capture_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let capture_id = require_id(capture_id, "capture_id")?;
    let capture = state.gateway()?.get_capture(&capture_id).await?;
    Ok(Json(capture))
}

/// POST /pp/captures/:id/refund - Refund a capture; an empty body refunds in full
pub async fn refund_capture(
    State(state): State<PaymentAppState>,
    Path(capture_id): Path<String>,
    OptionalJsonBody(request): OptionalJsonBody<RefundCaptureRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let capture_id = require_id(capture_id, "capture_id")?;
    let refund = state.gateway()?.refund_capture(&capture_id, request).await?;
    Ok(Json(refund))
}

// ════════════════════════════════════════════════════════════════════════════════
// Webhooks
// ════════════════════════════════════════════════════════════════════════════════

/// POST /pp/callback - Accept a webhook and relay it downstream
///
/// Answers as soon as the payload is accepted; delivery runs in the
/// background whether or not the gateway is configured.
pub async fn receive_callback(
    State(state): State<PaymentAppState>,
    JsonBody(payload): JsonBody<Map<String, Value>>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .callback_handler()
        .handle(ReceivePaymentCallbackCommand { payload })?;
    Ok(Json(CallbackAccepted::received()))
}
