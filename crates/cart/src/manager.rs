//! The cart state manager.
//!
//! Owns the authoritative line-item sequence. Every mutation persists the
//! full cart through the injected [`CartStore`] and notifies subscribed
//! [`CartObserver`]s with a fresh snapshot. Persistence failures are logged
//! and never roll back the in-memory mutation; the in-memory cart stays
//! authoritative for the rest of the session.

use morning_brew_core::ProductId;
use rust_decimal::Decimal;

use crate::checkout::CheckoutRequest;
use crate::config::CartConfig;
use crate::item::LineItem;
use crate::observer::CartObserver;
use crate::snapshot::CartSnapshot;
use crate::store::CartStore;

/// Single source of truth for cart contents.
///
/// Constructed explicitly with its configuration and storage adapter and
/// passed by reference to whatever consumes it; there is no ambient global
/// cart. All operations are synchronous and complete before returning, so
/// each is atomic with respect to the others.
pub struct CartManager {
    items: Vec<LineItem>,
    config: CartConfig,
    store: Box<dyn CartStore>,
    observers: Vec<Box<dyn CartObserver>>,
}

impl CartManager {
    /// Create a manager, restoring any cart persisted under the configured
    /// key.
    ///
    /// Restoration never fails: an unreadable backend or a corrupt payload
    /// is logged and replaced with an empty cart.
    #[must_use]
    pub fn new(config: CartConfig, store: Box<dyn CartStore>) -> Self {
        let items = load_items(store.as_ref(), &config.storage_key);
        Self {
            items,
            config,
            store,
            observers: Vec::new(),
        }
    }

    /// Register an observer for cart notifications.
    pub fn subscribe(&mut self, observer: Box<dyn CartObserver>) {
        self.observers.push(observer);
    }

    /// Add `quantity` units of a product to the cart.
    ///
    /// If a line with the same id already exists its quantity is
    /// incremented; otherwise a new line is appended. The name and unit
    /// price of an existing line are kept as captured at first add.
    ///
    /// A zero quantity or negative unit price is logged and ignored.
    pub fn add_item(
        &mut self,
        id: ProductId,
        name: impl Into<String>,
        unit_price: Decimal,
        quantity: u32,
    ) {
        if quantity == 0 {
            tracing::warn!(%id, "ignoring add with zero quantity");
            return;
        }
        if unit_price < Decimal::ZERO {
            tracing::warn!(%id, %unit_price, "ignoring add with negative unit price");
            return;
        }

        let name = name.into();
        if let Some(pos) = self.items.iter().position(|item| item.id == id) {
            if let Some(line) = self.items.get_mut(pos) {
                line.quantity = line.quantity.saturating_add(quantity);
            }
        } else {
            self.items.push(LineItem {
                id,
                name: name.clone(),
                unit_price,
                quantity,
            });
        }

        self.persist();
        let snapshot = self.snapshot();
        for observer in &self.observers {
            observer.on_cart_changed(&snapshot);
            observer.on_item_added(&name);
        }
    }

    /// Add `delta` (positive or negative) to a line's quantity.
    ///
    /// A line whose quantity would drop to zero or below is removed
    /// entirely. An id not in the cart is a no-op.
    pub fn change_quantity(&mut self, id: &ProductId, delta: i64) {
        let Some(pos) = self.items.iter().position(|item| &item.id == id) else {
            tracing::debug!(%id, "quantity change for item not in cart");
            return;
        };

        let current = self.items.get(pos).map_or(0, |line| i64::from(line.quantity));
        let next = current.saturating_add(delta);
        if next <= 0 {
            self.items.remove(pos);
        } else if let Some(line) = self.items.get_mut(pos) {
            line.quantity = u32::try_from(next).unwrap_or(u32::MAX);
        }

        self.persist();
        self.notify_changed();
    }

    /// Delete the line with the given id, if present.
    pub fn remove_item(&mut self, id: &ProductId) {
        let before = self.items.len();
        self.items.retain(|item| &item.id != id);
        if self.items.len() == before {
            tracing::debug!(%id, "remove for item not in cart");
        }

        self.persist();
        self.notify_changed();
    }

    /// Empty the cart unconditionally.
    pub fn clear(&mut self) {
        self.items.clear();
        self.persist();
        self.notify_changed();
    }

    /// An immutable view of the current items and derived totals.
    #[must_use]
    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot::new(&self.items, self.config.tax_rate, self.config.currency)
    }

    /// Freeze the cart into a checkout handoff.
    ///
    /// Returns `None` for an empty cart.
    #[must_use]
    pub fn checkout(&self) -> Option<CheckoutRequest> {
        CheckoutRequest::from_snapshot(self.snapshot())
    }

    fn persist(&mut self) {
        let payload = match serde_json::to_string(&self.items) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::error!(error = %e, "failed to serialize cart");
                return;
            }
        };

        if let Err(e) = self.store.write(&self.config.storage_key, &payload) {
            // Availability over durability: the in-memory cart stays
            // authoritative for the rest of the session.
            tracing::error!(error = %e, "failed to persist cart");
        }
    }

    fn notify_changed(&self) {
        let snapshot = self.snapshot();
        for observer in &self.observers {
            observer.on_cart_changed(&snapshot);
        }
    }
}

/// Restore the persisted line sequence, degrading to empty on any failure.
fn load_items(store: &dyn CartStore, key: &str) -> Vec<LineItem> {
    let raw = match store.read(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            tracing::warn!(error = %e, "failed to read persisted cart, starting empty");
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<LineItem>>(&raw) {
        Ok(items) => sanitize(items),
        Err(e) => {
            tracing::warn!(error = %e, "persisted cart is corrupt, starting empty");
            Vec::new()
        }
    }
}

/// Drop persisted lines that violate the stored-item invariants and merge
/// any duplicate ids, keeping the valid remainder.
fn sanitize(items: Vec<LineItem>) -> Vec<LineItem> {
    let mut out: Vec<LineItem> = Vec::with_capacity(items.len());
    for item in items {
        if !item.is_valid() {
            tracing::warn!(id = %item.id, "dropping invalid persisted line item");
            continue;
        }
        if let Some(existing) = out.iter_mut().find(|line| line.id == item.id) {
            tracing::warn!(id = %item.id, "merging duplicate persisted line item");
            existing.quantity = existing.quantity.saturating_add(item.quantity);
        } else {
            out.push(item);
        }
    }
    out
}
