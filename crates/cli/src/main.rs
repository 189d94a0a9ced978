//! Order Desk CLI - seed validation and order inspection.
//!
//! # Usage
//!
//! ```bash
//! # Validate a seed file without starting the server
//! od-cli seed check crates/admin/seeds/demo.yaml
//!
//! # List orders from a seed file (or the embedded demo seed)
//! od-cli orders list --seed orders.json
//!
//! # Print the WhatsApp notification link for an order
//! od-cli orders link 2
//! ```
//!
//! # Commands
//!
//! - `seed check` - Parse and validate a seed file
//! - `orders list` - Summarize orders with their items
//! - `orders link` - Compose an order's WhatsApp link

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use order_desk_core::OrderId;

mod commands;

#[derive(Parser)]
#[command(name = "od-cli")]
#[command(author, version, about = "Order Desk CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Work with seed files
    Seed {
        #[command(subcommand)]
        action: SeedAction,
    },
    /// Inspect seeded orders
    Orders {
        #[command(subcommand)]
        action: OrdersAction,
    },
}

#[derive(Subcommand)]
enum SeedAction {
    /// Parse and validate a seed file
    Check {
        /// Path to a `.yaml`, `.yml` or `.json` seed file
        file: PathBuf,
    },
}

#[derive(Subcommand)]
enum OrdersAction {
    /// List orders and their items
    List {
        /// Seed file (defaults to `ORDER_DESK_SEED_FILE`, then the demo seed)
        #[arg(short, long)]
        seed: Option<PathBuf>,
    },
    /// Print the WhatsApp notification link for an order
    Link {
        /// Order ID
        order_id: OrderId,

        /// Seed file (defaults to `ORDER_DESK_SEED_FILE`, then the demo seed)
        #[arg(short, long)]
        seed: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Seed { action } => match action {
            SeedAction::Check { file } => commands::seed::check(&file).await?,
        },
        Commands::Orders { action } => match action {
            OrdersAction::List { seed } => commands::orders::list(seed).await?,
            OrdersAction::Link { order_id, seed } => {
                commands::orders::link(order_id, seed).await?;
            }
        },
    }
    Ok(())
}
