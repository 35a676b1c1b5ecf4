//! Checkout orchestration.
//!
//! `Checkout<S>` owns everything the three steps share: the cart snapshot
//! (inside the totals panel), the address list and selection, the shipping
//! choice and the payment step. Forward moves consume the checkout and
//! either return the next stage or hand the unchanged checkout back in a
//! [`Rejected`].

use std::fmt;

use shared::models::{Address, AddressForm, CartSnapshot, CheckoutRequest, PaymentMethod, Voucher};
use tokio_util::sync::CancellationToken;

use crate::client::SkinClient;

use super::address::AddressStep;
use super::error::{CheckoutError, Notice};
use super::payment::{PaymentOutcome, PaymentStep};
use super::shipping::{ShippingMethod, ShippingStep};
use super::step::{AddressStage, PaymentStage, ShippingStage, Stage, StepIndex};
use super::totals::TotalsPanel;

/// A refused transition: the checkout as it was, plus the reason
pub struct Rejected<T> {
    pub checkout: T,
    pub error: CheckoutError,
}

impl<T> Rejected<T> {
    pub fn into_parts(self) -> (T, CheckoutError) {
        (self.checkout, self.error)
    }
}

impl<T> fmt::Debug for Rejected<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rejected").field("error", &self.error).finish_non_exhaustive()
    }
}

impl<T> fmt::Display for Rejected<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.error.fmt(f)
    }
}

// ============================================================================
// Core Checkout Definition
// ============================================================================

#[derive(Debug)]
pub struct Checkout<S: Stage> {
    client: SkinClient,
    totals: TotalsPanel,
    cart_error: Option<Notice>,
    address: AddressStep,
    shipping: ShippingStep,
    payment: PaymentStep,
    stage: S,
}

impl<S: Stage> Checkout<S> {
    fn into_stage<T: Stage>(self, stage: T) -> Checkout<T> {
        tracing::info!(from = %S::STEP, to = %T::STEP, "Checkout step change");
        Checkout {
            client: self.client,
            totals: self.totals,
            cart_error: self.cart_error,
            address: self.address,
            shipping: self.shipping,
            payment: self.payment,
            stage,
        }
    }

    pub fn step(&self) -> StepIndex {
        S::STEP
    }

    pub fn stage(&self) -> &S {
        &self.stage
    }

    pub fn client(&self) -> &SkinClient {
        &self.client
    }

    /// Abort every in-flight call of this checkout (navigation away)
    pub fn abort(&self) {
        tracing::info!(step = %S::STEP, "Checkout aborted");
        self.client.cancel();
    }

    pub fn cancel_token(&self) -> &CancellationToken {
        self.client.cancel_token()
    }

    // ----- cart -----

    pub fn cart(&self) -> Option<&CartSnapshot> {
        self.totals.cart()
    }

    /// Why the cart is missing, for the error state
    pub fn cart_error(&self) -> Option<&Notice> {
        self.cart_error.as_ref()
    }

    /// Ordering is possible only with a loaded cart
    pub fn can_place_order(&self) -> bool {
        self.totals.cart().is_some()
    }

    fn accept_cart(&mut self, result: Result<CartSnapshot, crate::ClientError>) -> Result<(), CheckoutError> {
        match result {
            Ok(cart) => {
                tracing::debug!(cart_id = %cart.cart_id, items = cart.items.len(), total = cart.total_price, "Cart loaded");
                self.totals.set_cart(Some(cart));
                self.cart_error = None;
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load cart");
                self.cart_error = Some(Notice::from(&e));
                Err(e.into())
            }
        }
    }

    pub async fn reload_cart(&mut self) -> Result<(), CheckoutError> {
        let result = self.client.cart().await;
        self.accept_cart(result)
    }

    pub async fn update_cart_item(&mut self, product_id: &str, quantity: u32) -> Result<(), CheckoutError> {
        let result = self.client.update_cart_item(product_id, quantity).await;
        self.accept_cart(result)
    }

    pub async fn remove_cart_item(&mut self, product_id: &str) -> Result<(), CheckoutError> {
        let result = self.client.remove_cart_item(product_id).await;
        self.accept_cart(result)
    }

    // ----- totals and voucher -----

    pub fn totals(&self) -> &TotalsPanel {
        &self.totals
    }

    pub fn vouchers(&self) -> &[Voucher] {
        self.totals.vouchers()
    }

    pub fn applied_voucher(&self) -> Option<&Voucher> {
        self.totals.applied()
    }

    pub fn apply_voucher(&mut self, code: Option<&str>) -> Result<&Voucher, CheckoutError> {
        self.totals.apply_voucher(code)
    }

    pub fn remove_voucher(&mut self) -> Option<Voucher> {
        self.totals.remove_voucher()
    }

    pub fn final_price(&self) -> f64 {
        self.totals.final_price()
    }

    // ----- address, shipping, payment -----

    pub fn address_step(&self) -> &AddressStep {
        &self.address
    }

    pub fn selected_address(&self) -> Option<&Address> {
        self.address.selected()
    }

    pub fn shipping_method(&self) -> ShippingMethod {
        self.shipping.method()
    }

    pub fn payment_method(&self) -> PaymentMethod {
        self.payment.method()
    }
}

// ============================================================================
// Address Stage
// ============================================================================

impl Checkout<AddressStage> {
    /// Start a checkout: cart, owned vouchers and addresses load
    /// concurrently and all three are awaited.
    ///
    /// A cart failure is kept as [`Checkout::cart_error`]; a voucher failure
    /// leaves the pool empty. Neither aborts the flow.
    pub async fn start(client: &SkinClient) -> Self {
        let client = client.with_cancellation();

        let (cart, vouchers, addresses) = tokio::join!(client.cart(), client.my_vouchers(), client.addresses());

        let vouchers = vouchers.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Failed to load vouchers, continuing without");
            Vec::new()
        });

        let mut checkout = Self {
            client,
            totals: TotalsPanel::new(None, vouchers),
            cart_error: None,
            address: AddressStep::from_load(addresses),
            shipping: ShippingStep::default(),
            payment: PaymentStep::default(),
            stage: AddressStage,
        };
        // Recorded in cart_error
        let _ = checkout.accept_cart(cart);

        tracing::info!(
            has_cart = checkout.cart().is_some(),
            vouchers = checkout.vouchers().len(),
            addresses = checkout.address.addresses().len(),
            "Checkout started"
        );
        checkout
    }

    pub fn select_address(&mut self, address_id: &str) -> Result<&Address, CheckoutError> {
        self.address.select(address_id)
    }

    pub async fn reload_addresses(&mut self) -> Result<(), CheckoutError> {
        self.address.load(&self.client).await
    }

    pub async fn create_address(&mut self, form: AddressForm) -> Result<Address, CheckoutError> {
        self.address.create(&self.client, form).await
    }

    pub async fn edit_address(&mut self, address_id: &str, form: AddressForm) -> Result<Address, CheckoutError> {
        self.address.edit(&self.client, address_id, form).await
    }

    pub fn continue_to_shipping(self) -> Result<Checkout<ShippingStage>, Rejected<Self>> {
        let checked = self.address.continue_with(self.totals.cart());
        match checked {
            Ok((cart_id, address_id)) => Ok(self.into_stage(ShippingStage { cart_id, address_id })),
            Err(error) => {
                tracing::info!(%error, "Cannot leave address step");
                Err(Rejected { checkout: self, error })
            }
        }
    }
}

// ============================================================================
// Shipping Stage
// ============================================================================

impl Checkout<ShippingStage> {
    pub fn select_shipping(&mut self, method: ShippingMethod) {
        self.shipping.select(method);
    }

    pub fn continue_to_payment(self) -> Result<Checkout<PaymentStage>, Rejected<Self>> {
        let checked = self
            .shipping
            .continue_with(&self.stage.cart_id, self.address.selected_id())
            .and_then(|ids| self.totals.proceed().map(|_| ids));
        match checked {
            Ok((cart_id, address_id)) => Ok(self.into_stage(PaymentStage { cart_id, address_id })),
            Err(error) => {
                tracing::info!(%error, "Cannot leave shipping step");
                Err(Rejected { checkout: self, error })
            }
        }
    }

    pub fn back_to_address(self) -> Checkout<AddressStage> {
        self.into_stage(AddressStage)
    }
}

// ============================================================================
// Payment Stage
// ============================================================================

impl Checkout<PaymentStage> {
    pub fn select_payment_method(&mut self, method: PaymentMethod) {
        self.payment.select_method(method);
    }

    pub fn is_submitting(&self) -> bool {
        self.payment.is_submitting()
    }

    /// Key the next submission will carry
    pub fn idempotency_key(&self) -> String {
        self.payment.idempotency_key()
    }

    /// The request [`place_order`](Self::place_order) would send
    pub fn checkout_request(&self) -> Result<CheckoutRequest, CheckoutError> {
        let (cart_id, voucher_code) = self.totals.proceed()?;
        Ok(self.payment.build_request(
            &cart_id,
            &self.stage.address_id,
            voucher_code,
            &self.client.config().payment_return_url,
        ))
    }

    /// Submit the order. On failure the checkout stays on this step so the
    /// shopper can retry.
    pub async fn place_order(&self) -> Result<PaymentOutcome, CheckoutError> {
        let request = self.checkout_request()?;
        self.payment.place_order(&self.client, &request).await
    }

    pub fn back_to_shipping(self) -> Checkout<ShippingStage> {
        let stage = ShippingStage {
            cart_id: self.stage.cart_id.clone(),
            address_id: self.stage.address_id.clone(),
        };
        self.into_stage(stage)
    }

    pub fn back_to_address(self) -> Checkout<AddressStage> {
        self.into_stage(AddressStage)
    }
}

// ============================================================================
// Any-step wrapper
// ============================================================================

/// A checkout at whichever step it is, for breadcrumb navigation
#[derive(Debug)]
pub enum CheckoutState {
    Address(Checkout<AddressStage>),
    Shipping(Checkout<ShippingStage>),
    Payment(Checkout<PaymentStage>),
}

impl CheckoutState {
    pub async fn start(client: &SkinClient) -> Self {
        Self::Address(Checkout::<AddressStage>::start(client).await)
    }

    pub fn step(&self) -> StepIndex {
        match self {
            Self::Address(c) => c.step(),
            Self::Shipping(c) => c.step(),
            Self::Payment(c) => c.step(),
        }
    }

    /// Breadcrumb click: only steps at or before the current one
    pub fn navigate_to(self, target: StepIndex) -> Result<Self, Rejected<Self>> {
        let current = self.step();
        if target > current {
            return Err(Rejected {
                error: CheckoutError::Validation(format!(
                    "Complete step {current} before going to step {target}"
                )),
                checkout: self,
            });
        }

        Ok(match (self, target) {
            (Self::Shipping(c), StepIndex::Address) => Self::Address(c.back_to_address()),
            (Self::Payment(c), StepIndex::Address) => Self::Address(c.back_to_address()),
            (Self::Payment(c), StepIndex::Shipping) => Self::Shipping(c.back_to_shipping()),
            (same, _) => same,
        })
    }

    /// Linear forward move from whichever step this is. From the payment
    /// step there is nowhere further to go inside the flow.
    pub fn advance(self) -> Result<Self, Rejected<Self>> {
        match self {
            Self::Address(c) => c.continue_to_shipping().map(Self::Shipping).map_err(|r| Rejected {
                checkout: Self::Address(r.checkout),
                error: r.error,
            }),
            Self::Shipping(c) => c.continue_to_payment().map(Self::Payment).map_err(|r| Rejected {
                checkout: Self::Shipping(r.checkout),
                error: r.error,
            }),
            Self::Payment(c) => Err(Rejected {
                checkout: Self::Payment(c),
                error: CheckoutError::Validation("Place the order to finish checkout".into()),
            }),
        }
    }

    pub fn as_address(&self) -> Option<&Checkout<AddressStage>> {
        match self {
            Self::Address(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_shipping(&self) -> Option<&Checkout<ShippingStage>> {
        match self {
            Self::Shipping(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_payment(&self) -> Option<&Checkout<PaymentStage>> {
        match self {
            Self::Payment(c) => Some(c),
            _ => None,
        }
    }
}

impl From<Checkout<AddressStage>> for CheckoutState {
    fn from(checkout: Checkout<AddressStage>) -> Self {
        Self::Address(checkout)
    }
}

impl From<Checkout<ShippingStage>> for CheckoutState {
    fn from(checkout: Checkout<ShippingStage>) -> Self {
        Self::Shipping(checkout)
    }
}

impl From<Checkout<PaymentStage>> for CheckoutState {
    fn from(checkout: Checkout<PaymentStage>) -> Self {
        Self::Payment(checkout)
    }
}
