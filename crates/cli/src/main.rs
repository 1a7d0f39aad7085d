//! Showcase CLI - carousel rendering and local-state tools.
//!
//! # Usage
//!
//! ```bash
//! # Render the carousel (feed on first run, cache afterwards)
//! showcase show
//!
//! # Inspect or drop the cached product feed
//! showcase cache status
//! showcase cache clear
//!
//! # Manage persisted favorites
//! showcase favorites list
//! showcase favorites toggle 42
//! showcase favorites clear
//! ```
//!
//! # Commands
//!
//! - `show` - Initialize and render the carousel to the console
//! - `cache` - Inspect or clear the cached product feed
//! - `favorites` - List, toggle, or clear persisted favorites

#![cfg_attr(not(test), forbid(unsafe_code))]
// Command output goes to stdout
#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};
use showcase_carousel::CarouselConfig;

mod commands;
mod store;
mod surface;

#[derive(Parser)]
#[command(name = "showcase")]
#[command(author, version, about = "Showcase carousel tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize and render the carousel
    Show,
    /// Inspect or clear the cached product feed
    Cache {
        #[command(subcommand)]
        action: CacheAction,
    },
    /// Manage persisted favorites
    Favorites {
        #[command(subcommand)]
        action: FavoritesAction,
    },
}

#[derive(Subcommand)]
enum CacheAction {
    /// Show whether the cache is populated, empty, or corrupt
    Status,
    /// Drop the cached product feed
    Clear,
}

#[derive(Subcommand)]
enum FavoritesAction {
    /// List favorited product ids
    List,
    /// Toggle the favorite state of a product
    Toggle {
        /// Product id to toggle
        id: String,
    },
    /// Remove all favorites
    Clear,
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
    let config = CarouselConfig::from_env()?;

    match cli.command {
        Commands::Show => commands::show::run(&config).await?,
        Commands::Cache { action } => match action {
            CacheAction::Status => commands::cache::status(&config)?,
            CacheAction::Clear => commands::cache::clear(&config)?,
        },
        Commands::Favorites { action } => match action {
            FavoritesAction::List => commands::favorites::list(&config)?,
            FavoritesAction::Toggle { id } => commands::favorites::toggle(&config, &id).await?,
            FavoritesAction::Clear => commands::favorites::clear(&config)?,
        },
    }
    Ok(())
}
