//! Integration tests for the Morning Brew cart.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p morning-brew-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_operations` - End-to-end mutation and observer scenarios
//! - `persistence` - Restart, corruption, and storage-failure scenarios
//!
//! The helpers here build managers over a temporary [`FileStore`] directory
//! so a "restart" is just constructing a second manager over the same
//! directory.

#![cfg_attr(not(test), forbid(unsafe_code))]

use morning_brew_cart::{CartConfig, CartManager, FileStore, StoreError};
use tempfile::TempDir;

/// A temporary cart environment shared by the scenarios.
pub struct TestContext {
    dir: TempDir,
}

impl TestContext {
    /// Create a fresh environment with an empty store directory.
    ///
    /// # Panics
    ///
    /// Panics if a temporary directory cannot be created.
    #[must_use]
    #[allow(clippy::unwrap_used)]
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    /// Open the store directory, as a fresh process would.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the directory cannot be opened.
    pub fn store(&self) -> Result<FileStore, StoreError> {
        FileStore::open(self.dir.path())
    }

    /// Build a manager over the shared store directory.
    ///
    /// Calling this twice models a process restart: the second manager
    /// restores whatever the first one persisted.
    ///
    /// # Panics
    ///
    /// Panics if the store directory cannot be opened.
    #[must_use]
    #[allow(clippy::unwrap_used)]
    pub fn manager(&self) -> CartManager {
        CartManager::new(CartConfig::default(), Box::new(self.store().unwrap()))
    }

    /// Path of the persisted cart file for the default storage key.
    #[must_use]
    pub fn cart_file(&self) -> std::path::PathBuf {
        self.dir.path().join("morning-brew-cart.json")
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
