//! Morning Brew Cart - Cart state manager.
//!
//! This crate owns the authoritative cart state for the Morning Brew
//! storefront: an ordered sequence of line items keyed by product id,
//! persisted through a pluggable key-value store after every mutation.
//!
//! # Architecture
//!
//! - [`CartManager`] - the single source of truth; exposes the mutation API
//! - [`CartStore`] - narrow synchronous key-value persistence capability
//! - [`CartObserver`] - notification seam for rendering and announcement layers
//! - [`CartSnapshot`] - immutable read view with derived totals
//!
//! The manager never fails out of a mutation: persistence errors are logged
//! and the in-memory cart stays authoritative for the rest of the session.
//!
//! # Example
//!
//! ```
//! use morning_brew_cart::{CartConfig, CartManager, MemoryStore};
//! use morning_brew_core::ProductId;
//! use rust_decimal::Decimal;
//!
//! let mut cart = CartManager::new(CartConfig::default(), Box::new(MemoryStore::new()));
//! let latte = ProductId::parse("latte").expect("non-empty id");
//! cart.add_item(latte, "Latte", Decimal::new(450, 2), 1);
//!
//! let snapshot = cart.snapshot();
//! assert_eq!(snapshot.totals().item_count, 1);
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

mod checkout;
mod config;
mod item;
mod manager;
mod observer;
mod snapshot;
mod store;

pub use checkout::CheckoutRequest;
pub use config::{CartConfig, ConfigError, DEFAULT_STORAGE_KEY};
pub use item::LineItem;
pub use manager::CartManager;
pub use observer::CartObserver;
pub use snapshot::{CartSnapshot, CartTotals};
pub use store::{CartStore, FileStore, MemoryStore, StoreError};
