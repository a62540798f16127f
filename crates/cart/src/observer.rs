//! Notification seam between cart state and presentation layers.

use crate::snapshot::CartSnapshot;

/// Receives cart lifecycle notifications.
///
/// The manager emits a cart-changed signal after every mutation and an
/// item-added signal when a product lands in the cart. Rendering and
/// announcement layers subscribe through this trait; the cart has no
/// knowledge of how items are displayed.
///
/// Both methods default to no-ops so subscribers implement only what they
/// consume.
pub trait CartObserver {
    /// Called after every mutation with the new snapshot.
    fn on_cart_changed(&self, _snapshot: &CartSnapshot) {}

    /// Called when an item is added, with the item's display name.
    fn on_item_added(&self, _name: &str) {}
}
