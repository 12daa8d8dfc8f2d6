//! Discount math.
//!
//! Handles the zero-baseline edge case explicitly instead of dividing.

use super::schema::Discount;

/// Discount of `cost` relative to `baseline_cost`
///
/// # Returns
/// `(baseline_cost - cost, discount / baseline_cost * 100)`, with the
/// percentage `Undefined` when the baseline cost is exactly zero
pub fn calculate_discount(baseline_cost: f64, cost: f64) -> (f64, Discount) {
    let discount_usd = baseline_cost - cost;

    let discount_pct = if baseline_cost == 0.0 {
        Discount::Undefined
    } else {
        Discount::Percent(discount_usd / baseline_cost * 100.0)
    };

    (discount_usd, discount_pct)
}
