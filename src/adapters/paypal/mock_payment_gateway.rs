//! Mock payment gateway for testing.
//!
//! Provides a configurable implementation of `PaymentGateway` for handler
//! and HTTP tests. Supports:
//! - Pre-configured responses per operation
//! - Error injection
//! - Call tracking

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::paypal::{
    CaptureDetails, CaptureOrderRequest, CaptureOrderResponse, CreateOrderRequest, Order,
    RefundCaptureRequest, RefundResponse,
};
use crate::ports::{PaymentError, PaymentGateway};

/// Mock payment gateway for testing.
///
/// # Example
///
/// ```ignore
/// let mock = MockPaymentGateway::new();
/// mock.set_order(Order { id: "5O190127TN364715T".into(), ..Default::default() });
/// mock.set_method_error("capture_order", PaymentError::from_status(422, "ORDER_NOT_APPROVED"));
/// ```
#[derive(Default, Clone)]
pub struct MockPaymentGateway {
    inner: Arc<Mutex<MockState>>,
}

#[derive(Default)]
struct MockState {
    next_order: Option<Order>,
    next_capture: Option<CaptureOrderResponse>,
    next_capture_details: Option<CaptureDetails>,
    next_refund: Option<RefundResponse>,

    /// Error to return on the next call to any method.
    next_error: Option<PaymentError>,

    /// Specific errors by method name.
    method_errors: HashMap<String, PaymentError>,

    call_log: Vec<MethodCall>,
}

/// Recorded method call for assertions.
#[derive(Debug, Clone)]
pub struct MethodCall {
    pub method: String,
    pub args: Vec<String>,
}

impl MockPaymentGateway {
    pub fn new() -> Self {
        Self::default()
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Configuration Methods
    // ════════════════════════════════════════════════════════════════════════════

    /// Order returned by `create_order` and `get_order`.
    pub fn set_order(&self, order: Order) {
        self.inner.lock().unwrap().next_order = Some(order);
    }

    pub fn set_capture(&self, capture: CaptureOrderResponse) {
        self.inner.lock().unwrap().next_capture = Some(capture);
    }

    pub fn set_capture_details(&self, details: CaptureDetails) {
        self.inner.lock().unwrap().next_capture_details = Some(details);
    }

    pub fn set_refund(&self, refund: RefundResponse) {
        self.inner.lock().unwrap().next_refund = Some(refund);
    }

    /// Set an error to return on the next call to any method.
    pub fn set_error(&self, error: PaymentError) {
        self.inner.lock().unwrap().next_error = Some(error);
    }

    /// Set an error for a specific method.
    pub fn set_method_error(&self, method: &str, error: PaymentError) {
        self.inner
            .lock()
            .unwrap()
            .method_errors
            .insert(method.to_string(), error);
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Call Tracking
    // ════════════════════════════════════════════════════════════════════════════

    pub fn calls(&self) -> Vec<MethodCall> {
        self.inner.lock().unwrap().call_log.clone()
    }

    pub fn was_called(&self, method: &str) -> bool {
        self.inner
            .lock()
            .unwrap()
            .call_log
            .iter()
            .any(|c| c.method == method)
    }

    pub fn call_count(&self) -> usize {
        self.inner.lock().unwrap().call_log.len()
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Internal Helpers
    // ════════════════════════════════════════════════════════════════════════════

    /// Record the call and return any injected error.
    fn begin(&self, method: &str, args: Vec<String>) -> Result<(), PaymentError> {
        let mut state = self.inner.lock().unwrap();
        state.call_log.push(MethodCall {
            method: method.to_string(),
            args,
        });

        if let Some(error) = state.next_error.take() {
            return Err(error);
        }
        if let Some(error) = state.method_errors.get(method) {
            return Err(error.clone());
        }
        Ok(())
    }
}

#[async_trait]
impl PaymentGateway for MockPaymentGateway {
    async fn create_order(&self, request: CreateOrderRequest) -> Result<Order, PaymentError> {
        self.begin(
            "create_order",
            vec![request.purchase_units.len().to_string()],
        )?;
        self.inner
            .lock()
            .unwrap()
            .next_order
            .clone()
            .ok_or_else(|| PaymentError::empty_response("create_order"))
    }

    async fn capture_order(
        &self,
        order_id: &str,
        _request: CaptureOrderRequest,
    ) -> Result<CaptureOrderResponse, PaymentError> {
        self.begin("capture_order", vec![order_id.to_string()])?;
        self.inner
            .lock()
            .unwrap()
            .next_capture
            .clone()
            .ok_or_else(|| PaymentError::empty_response("capture_order"))
    }

    async fn get_order(&self, order_id: &str) -> Result<Order, PaymentError> {
        self.begin("get_order", vec![order_id.to_string()])?;
        self.inner
            .lock()
            .unwrap()
            .next_order
            .clone()
            .ok_or_else(|| PaymentError::from_status(404, "RESOURCE_NOT_FOUND"))
    }

    async fn get_capture(&self, capture_id: &str) -> Result<CaptureDetails, PaymentError> {
        self.begin("get_capture", vec![capture_id.to_string()])?;
        self.inner
            .lock()
            .unwrap()
            .next_capture_details
            .clone()
            .ok_or_else(|| PaymentError::from_status(404, "RESOURCE_NOT_FOUND"))
    }

    async fn refund_capture(
        &self,
        capture_id: &str,
        request: RefundCaptureRequest,
    ) -> Result<RefundResponse, PaymentError> {
        self.begin(
            "refund_capture",
            vec![capture_id.to_string(), request.is_full_refund().to_string()],
        )?;
        self.inner
            .lock()
            .unwrap()
            .next_refund
            .clone()
            .ok_or_else(|| PaymentError::empty_response("refund_capture"))
    }
}
