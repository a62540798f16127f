//! Morning Brew Core - Shared types library.
//!
//! This crate provides common types used across all Morning Brew components:
//! - `cart` - Cart state manager and persistence adapters
//! - `cli` - Command-line front-end for the cart
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no
//! rendering. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe product ids and money values

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
