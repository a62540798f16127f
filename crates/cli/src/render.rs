//! Terminal rendering and announcements.
//!
//! These observers are the terminal counterparts of the storefront's cart
//! panel and its screen-reader live region: the renderer redraws the cart
//! after every change, the announcer emits the one-line summary and the
//! "added to cart" notice.

use morning_brew_cart::{CartObserver, CartSnapshot};

/// Print a cart listing with per-line and aggregate totals.
pub fn print_cart(snapshot: &CartSnapshot) {
    if snapshot.is_empty() {
        println!("Your cart is empty.");
        return;
    }

    for item in snapshot.items() {
        println!(
            "{:>3}x {:<28}{:>10}",
            item.quantity,
            item.name,
            snapshot.line_total(item).to_string()
        );
    }

    let totals = snapshot.totals();
    println!("{:-<43}", "");
    println!("{:<33}{:>10}", "Subtotal", totals.subtotal.to_string());
    println!("{:<33}{:>10}", "Tax", totals.tax.to_string());
    println!("{:<33}{:>10}", "Total", totals.total.to_string());
}

/// Redraws the cart after every mutation.
pub struct TerminalRenderer;

impl CartObserver for TerminalRenderer {
    fn on_cart_changed(&self, snapshot: &CartSnapshot) {
        print_cart(snapshot);
    }
}

/// Emits the summary line and add notices.
pub struct Announcer;

impl CartObserver for Announcer {
    fn on_cart_changed(&self, snapshot: &CartSnapshot) {
        let totals = snapshot.totals();
        println!("{} items in cart. Total: {}", totals.item_count, totals.total);
    }

    fn on_item_added(&self, name: &str) {
        println!("✓ {name} added to cart!");
    }
}
