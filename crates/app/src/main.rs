use anyhow::Context;
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

use commands::AppState;
use config::Config;

#[derive(Parser)]
#[command(name = "gastos", version, about = "Importa extratos colados e classifica gastos")]
struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Import pasted statement lines from a file, or stdin when omitted
    Import { file: Option<PathBuf> },
    /// Show stored records, newest import first
    List {
        /// Print the stored JSON payload instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Delete one record by its position in `list`
    Delete { position: usize },
    /// Delete every record
    Clear {
        #[arg(long)]
        yes: bool,
    },
    /// Classify a description without storing anything
    Classify {
        description: String,
        #[arg(long, allow_hyphen_values = true)]
        amount: Option<String>,
    },
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn open_state(config: &Config) -> anyhow::Result<AppState> {
    if let Some(parent) = config.database_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let db = gastos_storage::create_db(&config.database_path)
        .await
        .with_context(|| format!("failed to open {}", config.database_path.display()))?;
    tracing::debug!(path = %config.database_path.display(), "database ready");

    Ok(AppState {
        db,
        storage_key: config.storage_key.clone(),
    })
}

fn read_input(file: Option<PathBuf>) -> anyhow::Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;
    init_tracing(&config.log_filter);

    let message = match cli.command {
        Command::Classify { description, amount } => {
            commands::classify_description(&description, amount.as_deref())?
        }
        Command::Import { file } => {
            let raw = read_input(file)?;
            commands::import_text(&open_state(&config).await?, &raw).await?
        }
        Command::List { json: false } => commands::list(&open_state(&config).await?).await?,
        Command::List { json: true } => commands::export_json(&open_state(&config).await?).await?,
        Command::Delete { position } => {
            commands::delete(&open_state(&config).await?, position).await?
        }
        Command::Clear { yes } => commands::clear(&open_state(&config).await?, yes).await?,
    };
    println!("{message}");
    Ok(())
}
