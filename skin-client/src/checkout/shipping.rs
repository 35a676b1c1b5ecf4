//! Shipping step: a single free standard option, pre-selected

use super::error::CheckoutError;
use super::address::SELECT_ADDRESS_MESSAGE;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ShippingMethod {
    #[default]
    Standard,
}

impl ShippingMethod {
    pub const ALL: [ShippingMethod; 1] = [Self::Standard];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Standard => "Standard delivery (free)",
        }
    }

    pub fn fee(&self) -> f64 {
        match self {
            Self::Standard => 0.0,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ShippingStep {
    method: ShippingMethod,
}

impl ShippingStep {
    pub fn method(&self) -> ShippingMethod {
        self.method
    }

    pub fn select(&mut self, method: ShippingMethod) {
        self.method = method;
    }

    /// Forward `(cart_id, address_id)` unchanged, re-checking the address
    pub fn continue_with(&self, cart_id: &str, address_id: Option<&str>) -> Result<(String, String), CheckoutError> {
        let address_id = address_id
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| CheckoutError::Validation(SELECT_ADDRESS_MESSAGE.into()))?;
        if cart_id.trim().is_empty() {
            return Err(CheckoutError::NoCart);
        }
        Ok((cart_id.to_string(), address_id.to_string()))
    }
}
