//! Order and checkout Model

use serde::{Deserialize, Serialize};

/// Server-owned order status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Processing,
    Delivering,
    Done,
    Cancelled,
    /// A status this client does not know yet
    #[serde(other)]
    Unknown,
}

impl OrderStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Done | Self::Cancelled)
    }

    /// Whether the storefront offers a cancel action for this status.
    /// The server still decides whether the cancellation goes through.
    pub fn offers_cancel(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

/// Payment method chosen at checkout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    /// Redirect-based gateway
    #[default]
    #[serde(rename = "VNPAY")]
    Vnpay,
    /// Cash on delivery
    #[serde(rename = "COD")]
    Cod,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Vnpay => "VNPAY",
            Self::Cod => "COD",
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The single write that turns a cart into an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    pub address_id: String,
    pub cart_id: String,
    pub payment_method: PaymentMethod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voucher_code: Option<String>,
    pub return_url: String,
}

/// Checkout answer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResponse {
    #[serde(default, deserialize_with = "super::id::opt_string_or_number")]
    pub order_id: Option<String>,
    /// Gateway payment page (VNPAY only)
    #[serde(default, alias = "paymentUrl")]
    pub redirect_url: Option<String>,
}

/// Order line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    #[serde(deserialize_with = "super::id::string_or_number")]
    pub product_id: String,
    pub name: String,
    #[serde(default)]
    pub thumbnail: Option<String>,
    pub price: f64,
    pub quantity: u32,
    #[serde(default)]
    pub total_item_price: f64,
}

/// Order entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(deserialize_with = "super::id::string_or_number")]
    pub id: String,
    pub status: OrderStatus,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    #[serde(default)]
    pub total_price: f64,
    #[serde(default)]
    pub discount: f64,
    #[serde(default)]
    pub final_price: Option<f64>,
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub voucher_code: Option<String>,
    #[serde(default)]
    pub address_line: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Verification result of a gateway callback
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentCallbackResult {
    #[serde(default, deserialize_with = "super::id::opt_string_or_number")]
    pub order_id: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub transaction_no: Option<String>,
}
