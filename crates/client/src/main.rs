//! Volleyball stats tracker binary.
//!
//! # Architecture
//!
//! This binary is the composition root that assembles:
//! 1. StatStore (record + persistence) from `StoreConfig`
//! 2. Frontend (UI) - the terminal UI for the default command
//!
//! One-shot subcommands (`show`, `export`, `set`, ...) skip the frontend and
//! operate on the store directly.
//!
//! # Examples
//!
//! ```bash
//! # Interactive terminal UI
//! cargo run -p volley-client
//!
//! # Print the spreadsheet block
//! cargo run -p volley-client -- export
//! ```

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use client_frontend_cli::{CliConfig, CliFrontend, FrontendConfig, logging};
use stats_runtime::{StatStore, StoreConfig};
use volley_client::{Client, commands};

/// Single-player volleyball statistics tracker
#[derive(Parser)]
#[command(name = "volley")]
#[command(about = "Track volleyball player statistics", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory holding the saved stats (overrides VOLLEY_DATA_DIR)
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Parser)]
enum Command {
    /// Interactive terminal UI (default)
    Tui,

    /// Print counters and percentages
    Show(commands::Show),

    /// Print or save the spreadsheet export block
    Export(commands::Export),

    /// Replace the counters with an exported block
    Import(commands::Import),

    /// Set a counter to an exact value
    Set(commands::Set),

    /// Add one to a counter
    Inc(commands::Inc),

    /// Subtract one from a counter
    Dec(commands::Dec),

    /// Reset all counters to zero
    Reset(commands::Reset),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let mut store_config = StoreConfig::from_env()?;
    if let Some(dir) = cli.data_dir {
        store_config = store_config.with_data_dir(dir);
    }

    match cli.command.unwrap_or(Command::Tui) {
        Command::Tui => run_tui(store_config).await,
        command => run_command(command, &store_config),
    }
}

/// Run the terminal UI.
async fn run_tui(store_config: StoreConfig) -> Result<()> {
    // 1. Load configuration from environment
    let frontend_config = FrontendConfig::from_env();
    let cli_config = CliConfig::from_env();

    // 2. Setup logging (file only, the UI owns the terminal)
    logging::setup_logging(&stats_runtime::config::log_dir())?;

    tracing::info!("Starting volley client");
    tracing::info!("Persistence: {}", store_config.enable_persistence);

    // 3. Build store (independent layer)
    let store = StatStore::from_config(&store_config);

    // 4. Build frontend (independent layer)
    let frontend = CliFrontend::new(frontend_config, cli_config);

    // 5. Build and run
    let client = Client::builder().store(store).frontend(frontend).build()?;
    client.run().await?;

    tracing::info!("Client shutdown complete");
    Ok(())
}

/// Run a one-shot subcommand against the store.
fn run_command(command: Command, store_config: &StoreConfig) -> Result<()> {
    logging::setup_stderr_logging()?;

    let mut store = StatStore::from_config(store_config);
    let mut stdout = io::stdout().lock();

    match command {
        Command::Tui => anyhow::bail!("the terminal UI is not a one-shot command"),
        Command::Show(cmd) => cmd.execute(&store, &mut stdout),
        Command::Export(cmd) => cmd.execute(&store, &mut stdout),
        Command::Import(cmd) => cmd.execute(&mut store, &mut stdout),
        Command::Set(cmd) => cmd.execute(&mut store, &mut stdout),
        Command::Inc(cmd) => cmd.execute(&mut store, &mut stdout),
        Command::Dec(cmd) => cmd.execute(&mut store, &mut stdout),
        Command::Reset(cmd) => cmd.execute(&mut store, &mut io::stdin().lock(), &mut stdout),
    }?;

    if let Some(e) = store.last_persist_error() {
        anyhow::bail!("Failed to save stats to {}: {}", store.location(), e);
    }

    Ok(())
}
