//! Money helpers
//!
//! Arithmetic is done in `Decimal` and converted back to `f64` for the wire
//! models. Client-side totals are advisory; the server recomputes them at
//! checkout.

use rust_decimal::prelude::*;

/// 2 decimal places, half away from zero
const DECIMAL_PLACES: u32 = 2;

pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_else(|| {
        tracing::error!(value = ?value, "Non-finite f64 in monetary calculation, defaulting to zero");
        Decimal::ZERO
    })
}

pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// `max(0, subtotal - discount)`
pub fn final_price(subtotal: f64, discount: f64) -> f64 {
    let price = to_decimal(subtotal) - to_decimal(discount);
    to_f64(price.max(Decimal::ZERO))
}

pub fn meets_minimum(subtotal: f64, min_order_value: f64) -> bool {
    to_decimal(subtotal) >= to_decimal(min_order_value)
}

/// How much more the order needs to reach `min_order_value` (zero if it does)
pub fn shortfall(subtotal: f64, min_order_value: f64) -> f64 {
    let missing = to_decimal(min_order_value) - to_decimal(subtotal);
    to_f64(missing.max(Decimal::ZERO))
}

/// Dong amount with dot thousands separators, e.g. `1.250.000đ`
pub fn format_vnd(amount: f64) -> String {
    let rounded = to_decimal(amount).round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let digits = rounded.abs().trunc().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
    format!("{sign}{grouped}đ")
}
