//! Payment step
//!
//! Builds the checkout request, submits it at most once at a time and
//! decides where the shopper goes next.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use shared::models::{CheckoutRequest, CheckoutResponse, PaymentMethod};
use uuid::Uuid;

use crate::client::SkinClient;
use crate::error::ClientError;

use super::error::CheckoutError;

pub const ORDER_SUCCESS_ROUTE: &str = "/order-success";

/// Where the shopper goes after a successful submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// Full-page redirect to a third-party URL
    External(String),
    /// In-app route change
    Route(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentOutcome {
    /// Pay on the gateway's page
    GatewayRedirect { url: String },
    /// Order placed, nothing left to pay online
    OrderConfirmed { order_id: String },
}

impl PaymentOutcome {
    pub fn navigation(&self) -> Navigation {
        match self {
            Self::GatewayRedirect { url } => Navigation::External(url.clone()),
            Self::OrderConfirmed { order_id } => Navigation::Route(format!("{ORDER_SUCCESS_ROUTE}/{order_id}")),
        }
    }
}

/// Redirect only for the gateway method with a non-empty URL; every other
/// successful answer confirms the order.
pub fn classify(method: PaymentMethod, response: CheckoutResponse) -> Result<PaymentOutcome, ClientError> {
    if method == PaymentMethod::Vnpay
        && let Some(url) = response.redirect_url.filter(|u| !u.trim().is_empty())
    {
        return Ok(PaymentOutcome::GatewayRedirect { url });
    }
    response
        .order_id
        .map(|order_id| PaymentOutcome::OrderConfirmed { order_id })
        .ok_or_else(|| ClientError::InvalidResponse("checkout response has neither a payment URL nor an order id".into()))
}

#[derive(Debug)]
pub struct PaymentStep {
    method: PaymentMethod,
    idempotency_key: Mutex<String>,
    submitting: AtomicBool,
}

impl Default for PaymentStep {
    fn default() -> Self {
        Self {
            method: PaymentMethod::default(),
            idempotency_key: Mutex::new(Uuid::new_v4().to_string()),
            submitting: AtomicBool::new(false),
        }
    }
}

/// Clears the submitting flag when the submission ends, dropped futures
/// included.
struct Submission<'a>(&'a AtomicBool);

impl Drop for Submission<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl PaymentStep {
    pub fn method(&self) -> PaymentMethod {
        self.method
    }

    pub fn select_method(&mut self, method: PaymentMethod) {
        self.method = method;
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::Acquire)
    }

    /// Key sent with the next submission
    pub fn idempotency_key(&self) -> String {
        self.idempotency_key
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    fn rotate_key(&self) {
        let mut key = self.idempotency_key.lock().unwrap_or_else(|e| e.into_inner());
        *key = Uuid::new_v4().to_string();
    }

    pub fn build_request(
        &self,
        cart_id: &str,
        address_id: &str,
        voucher_code: Option<String>,
        return_url: &str,
    ) -> CheckoutRequest {
        CheckoutRequest {
            address_id: address_id.to_string(),
            cart_id: cart_id.to_string(),
            payment_method: self.method,
            voucher_code,
            return_url: return_url.to_string(),
        }
    }

    /// Submit the order.
    ///
    /// A second call while one is running fails with `SubmissionInFlight`.
    /// The idempotency key survives a transport failure, where the server may
    /// or may not have created the order, and is replaced after any
    /// definitive answer.
    pub async fn place_order(&self, client: &SkinClient, request: &CheckoutRequest) -> Result<PaymentOutcome, CheckoutError> {
        if self.submitting.swap(true, Ordering::AcqRel) {
            return Err(CheckoutError::SubmissionInFlight);
        }
        let _submission = Submission(&self.submitting);

        let key = self.idempotency_key();
        tracing::info!(
            cart_id = %request.cart_id,
            address_id = %request.address_id,
            payment_method = %request.payment_method,
            voucher_code = ?request.voucher_code,
            "Placing order"
        );

        let response = match client.checkout(request, &key).await {
            Ok(response) => response,
            Err(e) if e.is_transport() => {
                tracing::warn!(error = %e, "Checkout outcome unknown, keeping idempotency key for retry");
                return Err(e.into());
            }
            Err(e) => {
                tracing::warn!(error = %e, "Checkout rejected");
                self.rotate_key();
                return Err(e.into());
            }
        };
        self.rotate_key();

        let outcome = classify(request.payment_method, response)?;
        tracing::info!(?outcome, "Order placed");
        Ok(outcome)
    }
}
