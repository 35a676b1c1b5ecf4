//! Totals and voucher panel
//!
//! The only place the applied voucher changes. The final price shown here is
//! advisory; the server recomputes it at checkout.

use shared::models::{CartSnapshot, Voucher};

use crate::pricing;

use super::error::CheckoutError;

pub const SELECT_VOUCHER_MESSAGE: &str = "Please select a voucher";

#[derive(Debug, Clone, Default)]
pub struct TotalsPanel {
    cart: Option<CartSnapshot>,
    vouchers: Vec<Voucher>,
    applied: Option<Voucher>,
}

impl TotalsPanel {
    pub fn new(cart: Option<CartSnapshot>, vouchers: Vec<Voucher>) -> Self {
        Self {
            cart,
            vouchers,
            applied: None,
        }
    }

    /// Panel opened with a voucher already applied by the parent
    pub fn with_applied(mut self, voucher: Option<Voucher>) -> Self {
        self.applied = voucher;
        self
    }

    /// Replace the cart snapshot after a re-fetch; the applied voucher stays
    pub fn set_cart(&mut self, cart: Option<CartSnapshot>) {
        self.cart = cart;
    }

    pub fn set_vouchers(&mut self, vouchers: Vec<Voucher>) {
        self.vouchers = vouchers;
    }

    pub fn cart(&self) -> Option<&CartSnapshot> {
        self.cart.as_ref()
    }

    pub fn vouchers(&self) -> &[Voucher] {
        &self.vouchers
    }

    pub fn applied(&self) -> Option<&Voucher> {
        self.applied.as_ref()
    }

    pub fn subtotal(&self) -> f64 {
        self.cart.as_ref().map_or(0.0, |c| c.total_price)
    }

    /// The applied voucher's discount, taken as an absolute amount
    pub fn discount(&self) -> f64 {
        self.applied.as_ref().map_or(0.0, |v| v.discount)
    }

    pub fn final_price(&self) -> f64 {
        pricing::final_price(self.subtotal(), self.discount())
    }

    /// Disabled while a voucher is applied
    pub fn is_selector_enabled(&self) -> bool {
        self.applied.is_none()
    }

    pub fn is_eligible(&self, voucher: &Voucher) -> bool {
        pricing::meets_minimum(self.subtotal(), voucher.min_order_value)
    }

    /// Apply one owned voucher by code
    pub fn apply_voucher(&mut self, code: Option<&str>) -> Result<&Voucher, CheckoutError> {
        if let Some(applied) = &self.applied {
            return Err(CheckoutError::VoucherAlreadyApplied(applied.code.clone()));
        }

        let code = code
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .ok_or_else(|| CheckoutError::Validation(SELECT_VOUCHER_MESSAGE.into()))?;

        let voucher = self
            .vouchers
            .iter()
            .find(|v| v.code == code)
            .ok_or_else(|| CheckoutError::NotFound(format!("Voucher {code}")))?;

        let subtotal = self.cart.as_ref().ok_or(CheckoutError::NoCart)?.total_price;

        if !pricing::meets_minimum(subtotal, voucher.min_order_value) {
            tracing::info!(
                code,
                subtotal,
                min_order_value = voucher.min_order_value,
                "Voucher rejected, minimum order not met"
            );
            return Err(CheckoutError::MinOrderNotMet {
                code: voucher.code.clone(),
                subtotal,
                min_order_value: voucher.min_order_value,
                shortfall: pricing::shortfall(subtotal, voucher.min_order_value),
            });
        }

        tracing::info!(code, discount = voucher.discount, "Voucher applied");
        Ok(self.applied.insert(voucher.clone()))
    }

    /// Clear the applied voucher and re-enable the selector
    pub fn remove_voucher(&mut self) -> Option<Voucher> {
        let removed = self.applied.take();
        if let Some(voucher) = &removed {
            tracing::info!(code = %voucher.code, "Voucher removed");
        }
        removed
    }

    /// `(cart_id, applied voucher code)` for the next step
    pub fn proceed(&self) -> Result<(String, Option<String>), CheckoutError> {
        let cart = self.cart.as_ref().ok_or(CheckoutError::NoCart)?;
        Ok((cart.cart_id.clone(), self.applied.as_ref().map(|v| v.code.clone())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::DiscountType;

    fn cart(total_price: f64) -> CartSnapshot {
        CartSnapshot {
            cart_id: "cart-1".into(),
            items: vec![],
            total_price,
        }
    }

    fn voucher(code: &str, discount: f64, min_order_value: f64) -> Voucher {
        Voucher {
            id: format!("v-{code}"),
            code: code.into(),
            discount,
            discount_type: DiscountType::FixedAmount,
            min_order_value,
            description: None,
            point: 100,
        }
    }

    #[test]
    fn test_min_order_value_gate() {
        let mut panel = TotalsPanel::new(Some(cart(400_000.0)), vec![voucher("GLOW50", 50_000.0, 500_000.0)]);
        match panel.apply_voucher(Some("GLOW50")).unwrap_err() {
            CheckoutError::MinOrderNotMet { shortfall, .. } => assert_eq!(shortfall, 100_000.0),
            other => panic!("unexpected {other:?}"),
        }
        assert!(panel.applied().is_none());

        let mut panel = TotalsPanel::new(Some(cart(600_000.0)), vec![voucher("GLOW50", 50_000.0, 500_000.0)]);
        assert_eq!(panel.apply_voucher(Some("GLOW50")).unwrap().code, "GLOW50");
        assert_eq!(panel.final_price(), 550_000.0);
    }

    #[test]
    fn test_eligibility_matches_apply_for_all_pairs() {
        for subtotal in [0.0, 499_999.0, 500_000.0, 500_001.0, 2_000_000.0] {
            for min in [0.0, 500_000.0, 1_000_000.0] {
                let mut panel = TotalsPanel::new(Some(cart(subtotal)), vec![voucher("V", 10_000.0, min)]);
                let eligible = panel.is_eligible(&panel.vouchers()[0].clone());
                assert_eq!(panel.apply_voucher(Some("V")).is_ok(), subtotal >= min);
                assert_eq!(eligible, subtotal >= min);
            }
        }
    }

    #[test]
    fn test_final_price_floor() {
        let panel = TotalsPanel::new(Some(cart(100_000.0)), vec![])
            .with_applied(Some(voucher("BIG", 150_000.0, 0.0)));
        assert_eq!(panel.final_price(), 0.0);
        // The snapshot itself is untouched
        assert_eq!(panel.subtotal(), 100_000.0);
    }

    #[test]
    fn test_at_most_one_voucher() {
        let mut panel = TotalsPanel::new(
            Some(cart(800_000.0)),
            vec![voucher("A", 10_000.0, 0.0), voucher("B", 20_000.0, 0.0)],
        );
        panel.apply_voucher(Some("A")).unwrap();
        assert!(!panel.is_selector_enabled());

        assert!(matches!(
            panel.apply_voucher(Some("B")),
            Err(CheckoutError::VoucherAlreadyApplied(code)) if code == "A"
        ));
        assert_eq!(panel.applied().map(|v| v.code.as_str()), Some("A"));

        assert_eq!(panel.remove_voucher().map(|v| v.code), Some("A".to_string()));
        assert!(panel.is_selector_enabled());
        panel.apply_voucher(Some("B")).unwrap();
        assert_eq!(panel.discount(), 20_000.0);
    }

    #[test]
    fn test_apply_error_order() {
        let mut panel = TotalsPanel::new(None, vec![voucher("A", 10_000.0, 0.0)]);
        assert!(matches!(panel.apply_voucher(None), Err(CheckoutError::Validation(_))));
        assert!(matches!(panel.apply_voucher(Some("  ")), Err(CheckoutError::Validation(_))));
        assert!(matches!(panel.apply_voucher(Some("ZZZ")), Err(CheckoutError::NotFound(_))));
        assert!(matches!(panel.apply_voucher(Some("A")), Err(CheckoutError::NoCart)));
    }

    #[test]
    fn test_proceed() {
        let mut panel = TotalsPanel::new(Some(cart(300_000.0)), vec![voucher("A", 10_000.0, 0.0)]);
        assert_eq!(panel.proceed().unwrap(), ("cart-1".to_string(), None));
        panel.apply_voucher(Some("A")).unwrap();
        assert_eq!(panel.proceed().unwrap(), ("cart-1".to_string(), Some("A".to_string())));

        let empty = TotalsPanel::default();
        assert!(matches!(empty.proceed(), Err(CheckoutError::NoCart)));
    }
}
