//! Restart, corruption, and storage-failure scenarios.

#![allow(clippy::unwrap_used)]

use std::fs;

use morning_brew_core::ProductId;
use morning_brew_integration_tests::TestContext;
use rust_decimal::Decimal;

fn id(s: &str) -> ProductId {
    ProductId::parse(s).unwrap()
}

fn price(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

#[test]
fn cart_survives_restart() {
    let ctx = TestContext::new();

    {
        let mut cart = ctx.manager();
        cart.add_item(id("latte"), "Latte", price(450), 2);
        cart.add_item(id("mocha"), "Mocha", price(500), 1);
        cart.change_quantity(&id("latte"), 1);
    }

    // A second manager over the same directory restores the same cart
    let restored = ctx.manager();
    let snapshot = restored.snapshot();

    let lines: Vec<_> = snapshot
        .items()
        .iter()
        .map(|i| (i.id.as_str(), i.quantity))
        .collect();
    assert_eq!(lines, vec![("latte", 3), ("mocha", 1)]);
    assert_eq!(snapshot.totals().subtotal.amount, price(1850));
}

#[test]
fn persisted_payload_uses_the_record_format() {
    let ctx = TestContext::new();

    let mut cart = ctx.manager();
    cart.add_item(id("latte"), "Latte", price(450), 2);

    let raw = fs::read_to_string(ctx.cart_file()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

    let record = value.as_array().unwrap().first().unwrap();
    assert_eq!(record["id"], "latte");
    assert_eq!(record["name"], "Latte");
    assert_eq!(record["unitPrice"], "4.50");
    assert_eq!(record["quantity"], 2);
}

#[test]
fn corrupt_cart_file_restores_empty_without_fault() {
    let ctx = TestContext::new();

    {
        let mut cart = ctx.manager();
        cart.add_item(id("latte"), "Latte", price(450), 2);
    }

    fs::write(ctx.cart_file(), "{definitely-not-json").unwrap();

    let cart = ctx.manager();
    assert!(cart.snapshot().is_empty());
}

#[test]
fn wrong_shape_cart_file_restores_empty_without_fault() {
    let ctx = TestContext::new();

    fs::write(
        ctx.cart_file(),
        "{\"version\":2,\"items\":[{\"id\":\"latte\"}]}",
    )
    .unwrap();

    let cart = ctx.manager();
    assert!(cart.snapshot().is_empty());
}

#[test]
fn recovery_after_corruption_persists_fresh_state() {
    let ctx = TestContext::new();
    fs::write(ctx.cart_file(), "garbage").unwrap();

    {
        let mut cart = ctx.manager();
        assert!(cart.snapshot().is_empty());
        cart.add_item(id("mocha"), "Mocha", price(500), 1);
    }

    // The first mutation overwrote the corrupt payload
    let restored = ctx.manager();
    assert_eq!(restored.snapshot().totals().item_count, 1);
}

#[test]
fn clear_persists_the_empty_cart() {
    let ctx = TestContext::new();

    {
        let mut cart = ctx.manager();
        cart.add_item(id("latte"), "Latte", price(450), 2);
        cart.clear();
    }

    let restored = ctx.manager();
    assert!(restored.snapshot().is_empty());
    assert_eq!(fs::read_to_string(ctx.cart_file()).unwrap(), "[]");
}

#[test]
fn serialization_roundtrip_preserves_order_and_quantities() {
    let ctx = TestContext::new();

    {
        let mut cart = ctx.manager();
        cart.add_item(id("cold-brew"), "Cold Brew", price(525), 2);
        cart.add_item(id("latte"), "Latte", price(450), 1);
        cart.add_item(id("scone"), "Scone", price(325), 4);
    }

    let before = ctx.manager().snapshot();
    let after = ctx.manager().snapshot();

    assert_eq!(before.items(), after.items());
    assert_eq!(before.totals(), after.totals());
    let ids: Vec<_> = after.items().iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["cold-brew", "latte", "scone"]);
}
