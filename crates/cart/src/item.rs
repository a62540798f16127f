//! Cart line items.

use morning_brew_core::ProductId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One product entry in the cart.
///
/// The name and unit price are captured at the time the item is added and
/// are not re-synced if the catalog changes. While a line item is stored in
/// a cart its quantity is at least 1; a line reaching zero is removed, never
/// stored.
///
/// Serialized field names (`id`, `name`, `unitPrice`, `quantity`) are the
/// persisted record format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LineItem {
    /// Opaque product identifier, unique per distinct product.
    pub id: ProductId,
    /// Display name captured at time of add.
    pub name: String,
    /// Price per unit in the cart's currency.
    pub unit_price: Decimal,
    /// Number of units; at least 1 while the item is stored.
    pub quantity: u32,
}

impl LineItem {
    /// The line's contribution to the subtotal: `unit_price × quantity`.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }

    /// Whether the line satisfies the stored-item invariants.
    pub(crate) fn is_valid(&self) -> bool {
        self.quantity >= 1 && self.unit_price >= Decimal::ZERO
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn latte(quantity: u32) -> LineItem {
        LineItem {
            id: ProductId::parse("latte").unwrap(),
            name: "Latte".to_string(),
            unit_price: Decimal::new(450, 2),
            quantity,
        }
    }

    #[test]
    fn test_line_total() {
        assert_eq!(latte(3).line_total(), Decimal::new(1350, 2));
    }

    #[test]
    fn test_serialized_record_format() {
        let json = serde_json::to_string(&latte(2)).unwrap();
        assert_eq!(
            json,
            "{\"id\":\"latte\",\"name\":\"Latte\",\"unitPrice\":\"4.50\",\"quantity\":2}"
        );
    }

    #[test]
    fn test_deserialize_rejects_wrong_shape() {
        let wrong = "{\"id\":\"latte\",\"name\":\"Latte\",\"cost\":\"4.50\",\"quantity\":2}";
        assert!(serde_json::from_str::<LineItem>(wrong).is_err());
    }

    #[test]
    fn test_is_valid() {
        assert!(latte(1).is_valid());
        assert!(!latte(0).is_valid());

        let mut item = latte(1);
        item.unit_price = Decimal::new(-100, 2);
        assert!(!item.is_valid());
    }
}
