//! Voucher Model

use serde::{Deserialize, Serialize};

/// How the voucher discount was defined in the back-office
///
/// The checkout flow always receives `discount` as an absolute amount.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiscountType {
    Percentage,
    #[default]
    FixedAmount,
}

/// Voucher entity
///
/// Appears in two pools: vouchers the user owns (redeemed already) and
/// vouchers available for exchange with points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Voucher {
    #[serde(deserialize_with = "super::id::string_or_number")]
    pub id: String,
    pub code: String,
    /// Absolute discount amount
    pub discount: f64,
    #[serde(default)]
    pub discount_type: DiscountType,
    #[serde(default)]
    pub min_order_value: f64,
    #[serde(default)]
    pub description: Option<String>,
    /// Points needed to exchange for this voucher
    #[serde(default)]
    pub point: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_voucher_deserialize() {
        let json = r#"{
            "id": 5,
            "code": "GLOW50",
            "discount": 50000,
            "discountType": "FIXED_AMOUNT",
            "minOrderValue": 500000,
            "description": "50k off orders from 500k",
            "point": 200
        }"#;

        let voucher: Voucher = serde_json::from_str(json).unwrap();
        assert_eq!(voucher.id, "5");
        assert_eq!(voucher.code, "GLOW50");
        assert_eq!(voucher.discount, 50000.0);
        assert_eq!(voucher.discount_type, DiscountType::FixedAmount);
        assert_eq!(voucher.min_order_value, 500000.0);
        assert_eq!(voucher.point, 200);
    }

    #[test]
    fn test_voucher_defaults() {
        let json = r#"{"id":"v1","code":"FREE","discount":10,"discountType":"PERCENTAGE"}"#;
        let voucher: Voucher = serde_json::from_str(json).unwrap();
        assert_eq!(voucher.discount_type, DiscountType::Percentage);
        assert_eq!(voucher.min_order_value, 0.0);
        assert!(voucher.description.is_none());
        assert_eq!(voucher.point, 0);
    }
}
