mod cli;
mod commands;
mod config;
mod logging;

use anyhow::{Context, Result};
use cli::Args;
use commands::{Outcome, Settings};
use config::ConfigFile;
use owo_colors::OwoColorize;
use std::path::PathBuf;
use std::process;
use tracing::debug;
use vision_hive::adapters::outbound::filesystem::JsonSnapshotFile;
use vision_hive::adapters::outbound::memory::InMemoryStore;
use vision_hive::ports::outbound::SnapshotStore;
use vision_hive::shared::{CancelSignal, ExitCode, HiveError};

const DEFAULT_DATA_FILE: &str = "vision-hive.json";

#[tokio::main]
async fn main() {
    let args = Args::parse_args();
    logging::init(args.verbose);

    match run(args).await {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n{} {}", "❌ Error:".red().bold(), e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\n{} {}", "Caused by:".yellow(), cause);
            }

            eprintln!();
            process::exit(exit_code_for(&e).as_i32());
        }
    }
}

/// Typed library failures keep their own code; everything else is an
/// application error.
fn exit_code_for(error: &anyhow::Error) -> ExitCode {
    error
        .downcast_ref::<HiveError>()
        .map(HiveError::exit_code)
        .unwrap_or(ExitCode::ApplicationError)
}

async fn run(args: Args) -> Result<ExitCode> {
    let config = load_config(&args)?;
    let settings = Settings {
        pagination: config.pagination_config()?,
        capacity_policy: args
            .capacity_policy
            .or(config.capacity_policy)
            .unwrap_or_default(),
    };

    let data_path = args
        .data
        .clone()
        .or(config.data_file)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE));
    let snapshot_file = JsonSnapshotFile::new(data_path);
    let store = match snapshot_file
        .load()
        .with_context(|| format!("Failed to load data file: {}", snapshot_file.path().display()))?
    {
        Some(snapshot) => InMemoryStore::from_snapshot(snapshot)
            .map_err(|e| HiveError::persistence(e.to_string()))
            .with_context(|| {
                format!(
                    "Data file {} is inconsistent\n\n💡 Hint: Restore a backup or remove the file to start empty.",
                    snapshot_file.path().display()
                )
            })?,
        None => InMemoryStore::new(),
    };

    let cancel = CancelSignal::new();
    watch_interrupt(cancel.clone());

    let mutation = args.command.is_mutation();
    let outcome = commands::execute(args.command, &store, settings, &cancel).await?;

    match outcome {
        Outcome::Found(value) => {
            if mutation {
                snapshot_file.save(&store.snapshot().await).with_context(|| {
                    format!("Failed to save data file: {}", snapshot_file.path().display())
                })?;
            }
            let rendered =
                serde_json::to_string_pretty(&value).context("Failed to render output")?;
            println!("{}", rendered);
            Ok(ExitCode::Success)
        }
        Outcome::NotFound(message) => {
            eprintln!("{} {}", "⚠️  Not found:".yellow(), message);
            Ok(ExitCode::NotFound)
        }
    }
}

fn load_config(args: &Args) -> Result<ConfigFile> {
    if let Some(path) = &args.config {
        return config::load_config_from_path(path);
    }
    let cwd = std::env::current_dir().context("Failed to resolve the current directory")?;
    Ok(config::discover_config(&cwd)?.unwrap_or_default())
}

/// Ctrl-C flips the signal; in-flight repository calls then refuse to write.
fn watch_interrupt(cancel: CancelSignal) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            debug!("interrupt received, cancelling");
            cancel.cancel();
        }
    });
}
