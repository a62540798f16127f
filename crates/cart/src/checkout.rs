//! Checkout handoff.
//!
//! Checkout itself belongs to an external payment collaborator; the cart
//! only produces a frozen summary of what is being bought.

use crate::item::LineItem;
use crate::snapshot::{CartSnapshot, CartTotals};

/// A frozen order summary handed to the payment collaborator.
#[derive(Debug, Clone)]
pub struct CheckoutRequest {
    items: Vec<LineItem>,
    totals: CartTotals,
}

impl CheckoutRequest {
    /// Build a checkout request from a snapshot.
    ///
    /// Returns `None` for an empty cart; there is nothing to check out.
    #[must_use]
    pub fn from_snapshot(snapshot: CartSnapshot) -> Option<Self> {
        if snapshot.is_empty() {
            return None;
        }
        let (items, totals) = snapshot.into_parts();
        Some(Self { items, totals })
    }

    /// The line items being purchased.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// The totals at the moment of handoff.
    #[must_use]
    pub const fn totals(&self) -> &CartTotals {
        &self.totals
    }
}
