//! Order total computation over priced cart lines.

use rust_decimal::Decimal;

use crate::models::ItemId;

/// A priced, quantified entry shown at checkout.
#[derive(Clone, Debug, PartialEq)]
pub struct CartLine {
    pub item_id: ItemId,
    pub name: String,
    pub vendor: String,
    /// Unit price in exact decimal currency.
    pub price: Decimal,
    pub quantity: u32,
}

impl CartLine {
    /// Extended price for the line (unit price times quantity).
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// Derived subtotal, fee, and total for a set of cart lines.
///
/// Never stored; recomputed from the lines on every render.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrderSummary {
    pub subtotal: Decimal,
    pub delivery_fee: Decimal,
    pub total: Decimal,
}

/// Computes the order summary for a set of cart lines.
///
/// Pure: subtotal is the sum of price times quantity over all lines, and
/// the total adds the flat delivery fee. Exact decimal arithmetic keeps
/// displayed totals free of binary rounding drift.
pub fn compute_totals(lines: &[CartLine], delivery_fee: Decimal) -> OrderSummary {
    let subtotal: Decimal = lines.iter().map(CartLine::line_total).sum();
    OrderSummary {
        subtotal,
        delivery_fee,
        total: subtotal + delivery_fee,
    }
}

/// Formats a currency amount to two decimal places with a symbol.
pub fn format_money(symbol: &str, amount: Decimal) -> String {
    format!("{symbol}{:.2}", amount.round_dp(2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn line(item_id: ItemId, price: Decimal, quantity: u32) -> CartLine {
        CartLine {
            item_id,
            name: format!("item-{item_id}"),
            vendor: "Burger Junction".to_string(),
            price,
            quantity,
        }
    }

    #[test]
    fn totals_for_sample_cart() {
        let lines = vec![
            line(101, dec!(7.99), 2),
            line(201, dec!(3.49), 1),
            line(302, dec!(4.99), 1),
        ];
        let summary = compute_totals(&lines, dec!(1.99));
        assert_eq!(summary.subtotal, dec!(24.46));
        assert_eq!(summary.delivery_fee, dec!(1.99));
        assert_eq!(summary.total, dec!(26.45));
    }

    #[test]
    fn empty_cart_totals_to_fee() {
        let summary = compute_totals(&[], dec!(1.99));
        assert_eq!(summary.subtotal, Decimal::ZERO);
        assert_eq!(summary.total, dec!(1.99));
    }

    #[test]
    fn compute_totals_is_pure() {
        let lines = vec![line(101, dec!(7.99), 2), line(201, dec!(3.49), 1)];
        let first = compute_totals(&lines, dec!(1.99));
        let second = compute_totals(&lines, dec!(1.99));
        assert_eq!(first, second);
    }

    #[test]
    fn subtotal_is_linear_in_quantities() {
        let base = vec![line(101, dec!(7.99), 2), line(302, dec!(4.99), 3)];
        let scaled: Vec<CartLine> = base
            .iter()
            .map(|l| CartLine {
                quantity: l.quantity * 4,
                ..l.clone()
            })
            .collect();
        let base_summary = compute_totals(&base, Decimal::ZERO);
        let scaled_summary = compute_totals(&scaled, Decimal::ZERO);
        assert_eq!(scaled_summary.subtotal, base_summary.subtotal * dec!(4));
    }

    #[test]
    fn money_formats_to_two_places() {
        assert_eq!(format_money("$", dec!(26.45)), "$26.45");
        assert_eq!(format_money("$", dec!(7)), "$7.00");
        assert_eq!(format_money("€", dec!(15.5)), "€15.50");
    }
}
