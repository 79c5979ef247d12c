//! Line and order price breakdowns.
//!
//! The cart display and the checkout payload both call [`price_line`], so the
//! figures a shopper sees are the figures that get submitted. Arithmetic stays
//! in `f64` without intermediate rounding; [`format_money`] rounds to cents for
//! presentation only.

use crate::cart::CartLineItem;

/// Monetary breakdown of a single cart line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineBreakdown {
    pub quantity: u32,
    pub base_price: f64,
    /// Sum of the extra prices of every selected attribute value.
    pub extras: f64,
    /// `(base_price + extras) * quantity`.
    pub line_subtotal: f64,
    /// `line_subtotal * tax_rate`.
    pub line_tax: f64,
    pub line_total: f64,
}

/// Order-level sums across every line.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OrderTotals {
    pub subtotal: f64,
    pub tax: f64,
    pub grand_total: f64,
}

/// Non-finite inputs count as zero.
fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Prices one cart line.
#[must_use]
pub fn price_line(item: &CartLineItem) -> LineBreakdown {
    let quantity = item.quantity.max(1);
    let base_price = finite_or_zero(item.base_price);
    let extras: f64 = item
        .selected_attributes
        .iter()
        .map(|a| finite_or_zero(a.extra_price))
        .sum();
    let line_subtotal = (base_price + extras) * f64::from(quantity);
    let line_tax = line_subtotal * finite_or_zero(item.tax_rate);

    LineBreakdown {
        quantity,
        base_price,
        extras,
        line_subtotal,
        line_tax,
        line_total: line_subtotal + line_tax,
    }
}

/// Sums the breakdown of every line.
#[must_use]
pub fn price_lines(items: &[CartLineItem]) -> OrderTotals {
    items
        .iter()
        .map(price_line)
        .fold(OrderTotals::default(), |acc, line| OrderTotals {
            subtotal: acc.subtotal + line.line_subtotal,
            tax: acc.tax + line.line_tax,
            grand_total: acc.grand_total + line.line_total,
        })
}

/// Formats an amount for display, e.g. `12.5` → `"$12.50"`.
#[must_use]
pub fn format_money(amount: f64) -> String {
    format!("${:.2}", finite_or_zero(amount))
}

/// Formats a stored tax fraction as a percentage, e.g. `0.18` → `"18.00%"`.
#[must_use]
pub fn format_percent(fraction: f64) -> String {
    format!("{:.2}%", finite_or_zero(fraction) * 100.0)
}
