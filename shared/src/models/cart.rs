//! Cart Model

use serde::{Deserialize, Serialize};

/// One cart line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    #[serde(deserialize_with = "super::id::string_or_number")]
    pub product_id: String,
    pub name: String,
    #[serde(default)]
    pub thumbnail: Option<String>,
    /// Unit price
    pub price: f64,
    pub quantity: u32,
    /// Server-computed `price * quantity`
    #[serde(default)]
    pub total_item_price: f64,
}

/// Point-in-time copy of the authenticated user's cart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSnapshot {
    #[serde(deserialize_with = "super::id::string_or_number")]
    pub cart_id: String,
    #[serde(default)]
    pub items: Vec<CartItem>,
    /// Server-computed subtotal
    #[serde(default)]
    pub total_price: f64,
}

impl CartSnapshot {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total number of units across all lines
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    pub fn find(&self, product_id: &str) -> Option<&CartItem> {
        self.items.iter().find(|i| i.product_id == product_id)
    }
}

/// Update cart line payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItemUpdate {
    pub quantity: u32,
}
