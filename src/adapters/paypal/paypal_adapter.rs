//! PayPal REST adapter.
//!
//! Implements the `PaymentGateway` port against the PayPal Orders v2 and
//! Payments v2 APIs.
//!
//! # Authentication
//!
//! Calls are authorized with an OAuth2 client-credentials token. The token
//! is cached and refreshed 60 seconds before PayPal says it expires. A 401
//! from any API call drops the cached token so the next call fetches a
//! fresh one.
//!
//! # Configuration
//!
//! ```ignore
//! let adapter = PayPalAdapter::from_config(&config.paypal, http_client)
//!     .ok_or("PayPal credentials missing")?;
//! adapter.access_token().await?; // fail fast on bad credentials
//! ```

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use reqwest::{Method, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::RwLock;
use url::Url;

use crate::config::PayPalConfig;
use crate::domain::paypal::{
    is_resource_id, CaptureDetails, CaptureOrderRequest, CaptureOrderResponse, CreateOrderRequest,
    Order, RefundCaptureRequest, RefundResponse,
};
use crate::ports::{PaymentError, PaymentErrorCode, PaymentGateway};

use super::api_types::{CreateOrderBody, ErrorBody, TokenResponse};

/// Refresh the token this long before PayPal's stated expiry.
const TOKEN_EXPIRY_MARGIN_SECS: i64 = 60;

/// Orders are always created for immediate capture.
const ORDER_INTENT: &str = "CAPTURE";

#[derive(Clone)]
struct CachedToken {
    value: SecretString,
    expires_at: DateTime<Utc>,
}

impl CachedToken {
    fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        now + Duration::seconds(TOKEN_EXPIRY_MARGIN_SECS) < self.expires_at
    }
}

/// PayPal payment gateway adapter.
pub struct PayPalAdapter {
    http_client: reqwest::Client,
    base_url: String,
    client_id: String,
    client_secret: SecretString,
    token: RwLock<Option<CachedToken>>,
}

impl PayPalAdapter {
    /// Create an adapter for the given API base URL and credentials.
    pub fn new(
        http_client: reqwest::Client,
        base_url: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: SecretString,
    ) -> Self {
        Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client_id: client_id.into(),
            client_secret,
            token: RwLock::new(None),
        }
    }

    /// Build from configuration. `None` when credentials are absent.
    pub fn from_config(config: &PayPalConfig, http_client: reqwest::Client) -> Option<Self> {
        let (client_id, client_secret) = config.credentials()?;
        Some(Self::new(
            http_client,
            config.base_url(),
            client_id,
            client_secret.clone(),
        ))
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Current access token, fetching a new one when the cache is stale.
    pub async fn access_token(&self) -> Result<SecretString, PaymentError> {
        let now = Utc::now();
        if let Some(cached) = self.token.read().await.as_ref() {
            if cached.is_fresh(now) {
                return Ok(cached.value.clone());
            }
        }

        let mut slot = self.token.write().await;
        // Another task may have refreshed while we waited for the lock.
        if let Some(cached) = slot.as_ref() {
            if cached.is_fresh(Utc::now()) {
                return Ok(cached.value.clone());
            }
        }

        let fresh = self.fetch_token().await?;
        let value = fresh.value.clone();
        *slot = Some(fresh);
        Ok(value)
    }

    async fn fetch_token(&self) -> Result<CachedToken, PaymentError> {
        let url = format!("{}/v1/oauth2/token", self.base_url);

        let response = self
            .http_client
            .post(&url)
            .basic_auth(&self.client_id, Some(self.client_secret.expose_secret()))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await
            .map_err(|e| PaymentError::network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let body: ErrorBody = serde_json::from_str(&text).unwrap_or_default();
            let message = body.summary(&format!("token request returned {}", status.as_u16()));
            tracing::error!(
                status = status.as_u16(),
                error = %message,
                "PayPal token request failed"
            );
            return Err(PaymentError::authentication(format!(
                "PayPal authentication failed: {}",
                message
            )));
        }

        let token: TokenResponse = response.json().await.map_err(|e| {
            PaymentError::malformed(format!("Failed to parse PayPal token response: {}", e))
        })?;

        if token.access_token.is_empty() {
            return Err(PaymentError::empty_response("get_access_token"));
        }

        tracing::debug!(
            expires_in = token.expires_in,
            token_type = ?token.token_type,
            "PayPal access token refreshed"
        );

        Ok(CachedToken {
            value: SecretString::new(token.access_token),
            expires_at: Utc::now() + Duration::seconds(token.expires_in),
        })
    }

    async fn clear_token(&self) {
        *self.token.write().await = None;
    }

    /// API URL for `segments`, each percent-encoded as a single segment.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, PaymentError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| PaymentError::malformed(format!("invalid PayPal base URL: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| PaymentError::malformed("PayPal base URL cannot hold a path"))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Send an authorized request and decode the JSON answer.
    async fn execute<T, B>(
        &self,
        operation: &'static str,
        method: Method,
        segments: &[&str],
        body: Option<&B>,
    ) -> Result<T, PaymentError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.endpoint(segments)?;
        let token = self.access_token().await?;

        let mut request = self
            .http_client
            .request(method, url)
            .bearer_auth(token.expose_secret())
            .header("Prefer", "return=representation");
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| PaymentError::network(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| PaymentError::network(e.to_string()))?;

        if !status.is_success() {
            if status == StatusCode::UNAUTHORIZED {
                self.clear_token().await;
            }

            let error_body: ErrorBody = serde_json::from_str(&text).unwrap_or_default();
            let message = error_body.summary(&format!("PayPal returned {}", status.as_u16()));
            tracing::error!(
                operation,
                status = status.as_u16(),
                debug_id = ?error_body.debug_id,
                error = %message,
                "PayPal request failed"
            );

            let mut err = PaymentError::from_status(status.as_u16(), message);
            if let Some(debug_id) = error_body.debug_id {
                err = err.with_debug_id(debug_id);
            }
            return Err(err);
        }

        if text.trim().is_empty() {
            return Err(PaymentError::empty_response(operation));
        }

        serde_json::from_str(&text).map_err(|e| {
            PaymentError::malformed(format!("Failed to parse PayPal {} response: {}", operation, e))
        })
    }
}

/// Reject caller-supplied ids before they reach a provider URL.
fn check_path_id(id: &str, field: &str) -> Result<(), PaymentError> {
    if !is_resource_id(id) {
        tracing::warn!(field, "Rejected PayPal resource id");
        return Err(PaymentError::new(
            PaymentErrorCode::InvalidRequest,
            format!("{} must contain only letters, digits, '-' or '_'", field),
        ));
    }
    Ok(())
}

fn require_id(id: &str, operation: &str) -> Result<(), PaymentError> {
    if id.is_empty() {
        tracing::error!(operation, "PayPal returned a resource without an id");
        return Err(PaymentError::empty_response(operation));
    }
    Ok(())
}

#[async_trait]
impl PaymentGateway for PayPalAdapter {
    async fn create_order(&self, request: CreateOrderRequest) -> Result<Order, PaymentError> {
        let body = CreateOrderBody {
            intent: ORDER_INTENT,
            purchase_units: &request.purchase_units,
            payment_source: request.payment_source.as_ref(),
            application_context: request.app_context.as_ref(),
        };

        let order: Order = self
            .execute(
                "create_order",
                Method::POST,
                &["v2", "checkout", "orders"],
                Some(&body),
            )
            .await?;
        require_id(&order.id, "create_order")?;

        tracing::info!(order_id = %order.id, status = ?order.status(), "PayPal order created");
        Ok(order)
    }

    async fn capture_order(
        &self,
        order_id: &str,
        request: CaptureOrderRequest,
    ) -> Result<CaptureOrderResponse, PaymentError> {
        check_path_id(order_id, "order_id")?;
        let captured: CaptureOrderResponse = self
            .execute(
                "capture_order",
                Method::POST,
                &["v2", "checkout", "orders", order_id, "capture"],
                Some(&request),
            )
            .await?;
        require_id(&captured.id, "capture_order")?;

        tracing::info!(
            order_id = %captured.id,
            status = ?captured.status(),
            captures = captured.capture_ids().len(),
            "PayPal order captured"
        );
        Ok(captured)
    }

    async fn get_order(&self, order_id: &str) -> Result<Order, PaymentError> {
        check_path_id(order_id, "order_id")?;
        let order: Order = self
            .execute(
                "get_order",
                Method::GET,
                &["v2", "checkout", "orders", order_id],
                None::<&()>,
            )
            .await?;
        require_id(&order.id, "get_order")?;
        Ok(order)
    }

    async fn get_capture(&self, capture_id: &str) -> Result<CaptureDetails, PaymentError> {
        check_path_id(capture_id, "capture_id")?;
        let capture: CaptureDetails = self
            .execute(
                "get_capture",
                Method::GET,
                &["v2", "payments", "captures", capture_id],
                None::<&()>,
            )
            .await?;
        require_id(&capture.id, "get_capture")?;
        Ok(capture)
    }

    async fn refund_capture(
        &self,
        capture_id: &str,
        request: RefundCaptureRequest,
    ) -> Result<RefundResponse, PaymentError> {
        check_path_id(capture_id, "capture_id")?;
        let refund: RefundResponse = self
            .execute(
                "refund_capture",
                Method::POST,
                &["v2", "payments", "captures", capture_id, "refund"],
                Some(&request),
            )
            .await?;
        require_id(&refund.id, "refund_capture")?;

        tracing::info!(
            capture_id,
            refund_id = %refund.id,
            full_refund = request.is_full_refund(),
            "PayPal capture refunded"
        );
        Ok(refund)
    }
}
