//! Morning Brew CLI - Terminal front-end for the cart.
//!
//! # Usage
//!
//! ```bash
//! # Add three lattes
//! brew-cart add --id latte --name "Latte" --price 4.50 --quantity 3
//!
//! # Drop one
//! brew-cart update --id latte --delta -1
//!
//! # Show the cart
//! brew-cart show
//!
//! # Hand off to checkout
//! brew-cart checkout
//! ```
//!
//! The cart is persisted under `MORNING_BREW_DATA_DIR` (default
//! `.morning-brew/`), so it survives between invocations.

#![cfg_attr(not(test), forbid(unsafe_code))]
// This binary's whole job is rendering the cart to stdout
#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};
use morning_brew_cart::{CartConfig, CartManager, FileStore};

mod commands;
mod render;

#[derive(Parser)]
#[command(name = "brew-cart")]
#[command(author, version, about = "Morning Brew cart tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the cart contents and totals
    Show,
    /// Add a product to the cart
    Add {
        /// Product id (e.g. `latte`)
        #[arg(short, long)]
        id: String,

        /// Display name (e.g. "Latte")
        #[arg(short, long)]
        name: String,

        /// Unit price (e.g. 4.50)
        #[arg(short, long)]
        price: String,

        /// Units to add
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
    /// Change a line's quantity by a signed delta
    Update {
        /// Product id
        #[arg(short, long)]
        id: String,

        /// Quantity change (e.g. -1); a line dropping to zero is removed
        #[arg(short, long, allow_hyphen_values = true)]
        delta: i64,
    },
    /// Remove a line from the cart
    Remove {
        /// Product id
        #[arg(short, long)]
        id: String,
    },
    /// Empty the cart
    Clear,
    /// Hand the cart off to checkout
    Checkout,
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = CartConfig::from_env()?;
    let data_dir = std::env::var("MORNING_BREW_DATA_DIR")
        .unwrap_or_else(|_| ".morning-brew".to_string());
    let store = FileStore::open(data_dir)?;

    let mut cart = CartManager::new(config, Box::new(store));
    cart.subscribe(Box::new(render::TerminalRenderer));
    cart.subscribe(Box::new(render::Announcer));

    match cli.command {
        Commands::Show => commands::cart::show(&cart),
        Commands::Add {
            id,
            name,
            price,
            quantity,
        } => commands::cart::add(&mut cart, &id, &name, &price, quantity)?,
        Commands::Update { id, delta } => commands::cart::update(&mut cart, &id, delta)?,
        Commands::Remove { id } => commands::cart::remove(&mut cart, &id)?,
        Commands::Clear => commands::cart::clear(&mut cart),
        Commands::Checkout => commands::cart::checkout(&cart),
    }

    Ok(())
}
