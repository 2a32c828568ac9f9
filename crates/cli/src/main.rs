//! BramsStore CLI - catalog checks and an offline demo walkthrough.
//!
//! # Usage
//!
//! ```bash
//! # Fetch and validate the remote catalog
//! brams-cli catalog check
//!
//! # Same, against a different source
//! brams-cli catalog check --url https://example.com/products.json
//!
//! # Dump the built-in fallback catalog as JSON
//! brams-cli catalog fallback
//!
//! # Run the full store flow in memory (no server, no network)
//! brams-cli demo
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use url::Url;

mod commands;

#[derive(Parser)]
#[command(name = "brams-cli")]
#[command(author, version, about = "BramsStore CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect catalog sources
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
    /// Run the store flow end to end in memory
    Demo,
}

#[derive(Subcommand)]
enum CatalogAction {
    /// Fetch the remote catalog and report what parsed
    Check {
        /// Catalog URL (defaults to the configured source)
        #[arg(long)]
        url: Option<Url>,
    },
    /// Print the built-in fallback catalog as JSON
    Fallback,
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
        Commands::Catalog { action } => match action {
            CatalogAction::Check { url } => commands::catalog::check(url).await?,
            CatalogAction::Fallback => commands::catalog::fallback()?,
        },
        Commands::Demo => commands::demo::run()?,
    }

    Ok(())
}
