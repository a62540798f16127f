//! Cart subcommands.
//!
//! Each subcommand parses its operands into domain types, applies one cart
//! operation, and lets the subscribed observers render the result.

use morning_brew_cart::CartManager;
use morning_brew_core::ProductId;
use rust_decimal::Decimal;

use crate::render;

/// Print the current cart.
pub fn show(cart: &CartManager) {
    render::print_cart(&cart.snapshot());
}

/// Add `quantity` units of a product.
///
/// # Errors
///
/// Returns an error if the id is empty or the price is not a non-negative
/// decimal.
pub fn add(
    cart: &mut CartManager,
    id: &str,
    name: &str,
    price: &str,
    quantity: u32,
) -> Result<(), Box<dyn std::error::Error>> {
    let id = ProductId::parse(id)?;
    let price = price.parse::<Decimal>()?;
    if price < Decimal::ZERO {
        return Err("unit price cannot be negative".into());
    }

    cart.add_item(id, name, price, quantity);
    Ok(())
}

/// Apply a signed quantity change to a line.
///
/// # Errors
///
/// Returns an error if the id is empty.
pub fn update(
    cart: &mut CartManager,
    id: &str,
    delta: i64,
) -> Result<(), Box<dyn std::error::Error>> {
    let id = ProductId::parse(id)?;
    cart.change_quantity(&id, delta);
    Ok(())
}

/// Remove a line from the cart.
///
/// # Errors
///
/// Returns an error if the id is empty.
pub fn remove(cart: &mut CartManager, id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let id = ProductId::parse(id)?;
    cart.remove_item(&id);
    Ok(())
}

/// Empty the cart.
pub fn clear(cart: &mut CartManager) {
    cart.clear();
}

/// Hand the cart off to checkout.
pub fn checkout(cart: &CartManager) {
    let Some(request) = cart.checkout() else {
        println!("Your cart is empty.");
        return;
    };

    println!("Proceeding to checkout...");
    for item in request.items() {
        println!("  {}x {}", item.quantity, item.name);
    }
    println!("Amount due: {}", request.totals().total);
    println!("This is where a payment gateway would take over.");
}
