//! Step markers for the checkout typestate.
//!
//! `Checkout<S>` only exposes the transitions that are legal from `S`, so
//! skipping the shipping step does not compile.

use std::fmt;

// ============================================================================
// Step Index
// ============================================================================

/// Breadcrumb position, 1-based
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StepIndex {
    Address = 1,
    Shipping = 2,
    Payment = 3,
}

impl StepIndex {
    pub const ALL: [StepIndex; 3] = [Self::Address, Self::Shipping, Self::Payment];

    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Address => "Address",
            Self::Shipping => "Shipping",
            Self::Payment => "Payment",
        }
    }
}

impl TryFrom<u8> for StepIndex {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Address),
            2 => Ok(Self::Shipping),
            3 => Ok(Self::Payment),
            other => Err(other),
        }
    }
}

impl fmt::Display for StepIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.label())
    }
}

// ============================================================================
// Stage Markers
// ============================================================================

/// Choosing or creating a delivery address.
///
/// Available transitions:
/// - `continue_to_shipping()` -> ShippingStage
#[derive(Debug, Clone, Default)]
pub struct AddressStage;

/// Confirming the shipping method.
///
/// Available transitions:
/// - `continue_to_payment()` -> PaymentStage
/// - `back_to_address()` -> AddressStage
#[derive(Debug, Clone)]
pub struct ShippingStage {
    pub cart_id: String,
    pub address_id: String,
}

/// Choosing a payment method and placing the order.
///
/// Available transitions:
/// - `back_to_shipping()` -> ShippingStage
/// - `back_to_address()` -> AddressStage
#[derive(Debug, Clone)]
pub struct PaymentStage {
    pub cart_id: String,
    pub address_id: String,
}

/// Sealed trait for checkout stages.
pub trait Stage: private::Sealed + Send + Sync + 'static {
    const STEP: StepIndex;
}

impl Stage for AddressStage {
    const STEP: StepIndex = StepIndex::Address;
}
impl Stage for ShippingStage {
    const STEP: StepIndex = StepIndex::Shipping;
}
impl Stage for PaymentStage {
    const STEP: StepIndex = StepIndex::Payment;
}

mod private {
    pub trait Sealed {}
    impl Sealed for super::AddressStage {}
    impl Sealed for super::ShippingStage {}
    impl Sealed for super::PaymentStage {}
}
