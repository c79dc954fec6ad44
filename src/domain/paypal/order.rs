//! Order payloads for the PayPal Orders v2 API.
//!
//! Request bodies model the fields PayPal validates and keep the rest in
//! `extra`. The `Order` response keeps everything but `id` raw.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::resource;

/// Currency amount as PayPal encodes it (decimal string value).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Money {
    pub currency_code: String,
    pub value: String,
}

/// Amount of a purchase unit, optionally with an itemized breakdown.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PurchaseUnitAmount {
    pub currency_code: String,
    pub value: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<Value>,
}

/// Line item inside a purchase unit.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Item {
    pub name: String,
    pub unit_amount: Money,
    pub quantity: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax: Option<Money>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Purchase unit as submitted when creating an order.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PurchaseUnitRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_id: Option<String>,

    pub amount: PurchaseUnitAmount,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payee: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub soft_descriptor: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<Item>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping: Option<Value>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// How the payer funds the order (wallet, card, vaulted token, ...).
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct PaymentSource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paypal: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<Value>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Checkout experience settings (return URLs, branding, landing page).
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ApplicationContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub landing_page: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_preference: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_action: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancel_url: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Everything needed to create an order with `CAPTURE` intent.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CreateOrderRequest {
    pub purchase_units: Vec<PurchaseUnitRequest>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_source: Option<PaymentSource>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_context: Option<ApplicationContext>,
}

impl CreateOrderRequest {
    /// Checks the fields PayPal would otherwise reject with a less helpful error.
    pub fn validate(&self) -> Result<(), String> {
        if self.purchase_units.is_empty() {
            return Err("purchase_units must contain at least one purchase unit".to_string());
        }
        for (index, unit) in self.purchase_units.iter().enumerate() {
            if unit.amount.currency_code.trim().is_empty() {
                return Err(format!(
                    "purchase_units[{index}].amount.currency_code is required"
                ));
            }
            if unit.amount.value.trim().is_empty() {
                return Err(format!("purchase_units[{index}].amount.value is required"));
            }
        }
        Ok(())
    }
}

/// HATEOAS link attached to provider resources.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Link {
    pub href: String,
    pub rel: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
}

/// An order as PayPal returned it.
///
/// Only `id` is lifted out. Everything else stays in `extra` as received,
/// explicit nulls and empty arrays included, so the caller sees PayPal's
/// body unchanged.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Order {
    #[serde(default)]
    pub id: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Order {
    pub fn status(&self) -> Option<&str> {
        resource::str_field(&self.extra, "status")
    }

    pub fn links(&self) -> Vec<Link> {
        resource::links(&self.extra)
    }

    /// URL the payer must visit to approve the order.
    ///
    /// PayPal names it `approve` for wallet checkouts and `payer-action`
    /// when a payment source was supplied up front.
    pub fn approval_url(&self) -> Option<&str> {
        resource::link_href(&self.extra, &["approve", "payer-action"])
    }
}
