//! Read-only cart views with derived totals.

use morning_brew_core::{CurrencyCode, Money};
use rust_decimal::Decimal;

use crate::item::LineItem;

/// Aggregate figures derived from the cart's line items.
///
/// Totals are never stored; they are recomputed from the line sequence on
/// every snapshot. `tax = subtotal × tax_rate` and `total = subtotal + tax`
/// are carried unrounded, rounding happens at display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartTotals {
    /// Sum of all line quantities.
    pub item_count: u32,
    /// Sum of `unit_price × quantity` over all lines.
    pub subtotal: Money,
    /// Tax on the subtotal.
    pub tax: Money,
    /// Subtotal plus tax.
    pub total: Money,
}

impl CartTotals {
    fn compute(items: &[LineItem], tax_rate: Decimal, currency: CurrencyCode) -> Self {
        let item_count = items.iter().fold(0u32, |n, i| n.saturating_add(i.quantity));
        let subtotal: Decimal = items.iter().map(LineItem::line_total).sum();
        let tax = subtotal * tax_rate;
        let total = subtotal + tax;

        Self {
            item_count,
            subtotal: Money::new(subtotal, currency),
            tax: Money::new(tax, currency),
            total: Money::new(total, currency),
        }
    }
}

/// An immutable view of the cart at a point in time.
///
/// Snapshots hold their own copy of the line sequence; mutating the cart
/// after taking a snapshot does not change it.
#[derive(Debug, Clone)]
pub struct CartSnapshot {
    items: Vec<LineItem>,
    currency: CurrencyCode,
    totals: CartTotals,
}

impl CartSnapshot {
    pub(crate) fn new(items: &[LineItem], tax_rate: Decimal, currency: CurrencyCode) -> Self {
        Self {
            items: items.to_vec(),
            currency,
            totals: CartTotals::compute(items, tax_rate, currency),
        }
    }

    /// The line items, in cart order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// The derived totals.
    #[must_use]
    pub const fn totals(&self) -> &CartTotals {
        &self.totals
    }

    /// The currency all amounts are denominated in.
    #[must_use]
    pub const fn currency(&self) -> CurrencyCode {
        self.currency
    }

    /// Whether the cart holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// A line's `unit_price × quantity` as a money value.
    #[must_use]
    pub fn line_total(&self, item: &LineItem) -> Money {
        Money::new(item.line_total(), self.currency)
    }

    pub(crate) fn into_parts(self) -> (Vec<LineItem>, CartTotals) {
        (self.items, self.totals)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use morning_brew_core::ProductId;

    use super::*;

    fn items() -> Vec<LineItem> {
        vec![
            LineItem {
                id: ProductId::parse("latte").unwrap(),
                name: "Latte".to_string(),
                unit_price: Decimal::new(450, 2),
                quantity: 3,
            },
            LineItem {
                id: ProductId::parse("scone").unwrap(),
                name: "Scone".to_string(),
                unit_price: Decimal::new(325, 2),
                quantity: 1,
            },
        ]
    }

    #[test]
    fn test_totals_identities() {
        let tax_rate = Decimal::new(9, 2);
        let snapshot = CartSnapshot::new(&items(), tax_rate, CurrencyCode::USD);
        let totals = snapshot.totals();

        let expected_subtotal: Decimal = items().iter().map(LineItem::line_total).sum();
        assert_eq!(totals.item_count, 4);
        assert_eq!(totals.subtotal.amount, expected_subtotal);
        assert_eq!(totals.tax.amount, expected_subtotal * tax_rate);
        assert_eq!(
            totals.total.amount,
            expected_subtotal * (Decimal::ONE + tax_rate)
        );
    }

    #[test]
    fn test_empty_totals_are_zero() {
        let snapshot = CartSnapshot::new(&[], Decimal::new(9, 2), CurrencyCode::USD);
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.totals().item_count, 0);
        assert_eq!(snapshot.totals().subtotal.amount, Decimal::ZERO);
        assert_eq!(snapshot.totals().tax.amount, Decimal::ZERO);
        assert_eq!(snapshot.totals().total.amount, Decimal::ZERO);
    }

    #[test]
    fn test_line_total() {
        let snapshot = CartSnapshot::new(&items(), Decimal::new(9, 2), CurrencyCode::USD);
        let first = snapshot.items().first().unwrap();
        assert_eq!(format!("{}", snapshot.line_total(first)), "$13.50");
    }

    #[test]
    fn test_snapshot_is_detached_from_source() {
        let source = items();
        let snapshot = CartSnapshot::new(&source, Decimal::new(9, 2), CurrencyCode::USD);
        drop(source);
        assert_eq!(snapshot.items().len(), 2);
    }
}
