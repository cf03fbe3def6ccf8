mod serve;
mod validate;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Riskwise content service toolchain.
#[derive(Parser)]
#[command(name = "riskwise", version, about = "Riskwise content service")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the JSON API over a store document
    Serve {
        /// Path to the JSON store document
        store: PathBuf,
        /// Port to listen on
        #[arg(long, default_value_t = 4000)]
        port: u16,
    },

    /// Check that every record in a store document maps to a valid entity
    Validate {
        /// Path to the JSON store document
        store: PathBuf,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Serve { store, port } => serve::run(&store, port).await,
        Commands::Validate { store } => validate::run(&store).await,
    };

    if let Err(message) = result {
        eprintln!("{message}");
        process::exit(1);
    }
}
