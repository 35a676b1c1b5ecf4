//! Checkout orchestration and voucher flow
//!
//! Address -> Shipping -> Payment, with the totals/voucher panel shared by
//! all three steps, and the gateway-return verifier that closes the loop
//! after an external payment.

pub mod address;
pub mod error;
pub mod flow;
pub mod gateway_return;
pub mod payment;
pub mod shipping;
pub mod step;
pub mod totals;

pub use address::AddressStep;
pub use error::{CheckoutError, ErrorKind, Notice};
pub use flow::{Checkout, CheckoutState, Rejected};
pub use gateway_return::{GatewayReturn, PaymentVerdict, verify_gateway_return};
pub use payment::{Navigation, PaymentOutcome, PaymentStep, classify};
pub use shipping::{ShippingMethod, ShippingStep};
pub use step::{AddressStage, PaymentStage, ShippingStage, Stage, StepIndex};
pub use totals::TotalsPanel;
