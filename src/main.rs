//! edit-review entry point.
//!
//! Loads a dataset of suggested section edits and walks a reviewer through
//! them in the terminal, uploading each finished review to the configured
//! store.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};

use edit_review::application::review::highlight;
use edit_review::data::load_dataset_file;
use edit_review::infra::app_config::{self, AppConfig, StorageBackend};
use edit_review::infra::sink::ObjectStoreSink;
use edit_review::ui::app::{Action, DatasetAction, ReviewApp};
use edit_review::ui::terminal;

#[derive(Parser, Debug)]
#[command(name = "edit-review")]
#[command(version)]
#[command(about = "Review suggested Wikipedia section edits", long_about = None)]
struct Args {
    /// Config file (defaults to EDIT_REVIEW_CONFIG_PATH or the data dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Storage backend override (gcs, local, memory)
    #[arg(long, global = true)]
    backend: Option<StorageBackend>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Interactive review session
    Review {
        /// Dataset to load on start
        file: Option<PathBuf>,
    },

    /// Print the entries of a dataset
    List { file: PathBuf },

    /// Print the highlighted before/after of one entry
    Diff {
        file: PathBuf,
        /// Entry uid (defaults to the first entry)
        #[arg(long)]
        uid: Option<String>,
    },

    /// Write a default config file if none exists
    InitConfig,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    match args.command.unwrap_or(Commands::Review { file: None }) {
        Commands::Review { file } => {
            let config = load_config(args.config.as_deref(), args.backend)?;
            review(&config, file)
        }
        Commands::List { file } => list(&file),
        Commands::Diff { file, uid } => diff(&file, uid.as_deref()),
        Commands::InitConfig => init_config(args.config),
    }
}

fn load_config(
    explicit: Option<&Path>,
    backend: Option<StorageBackend>,
) -> Result<AppConfig> {
    let mut config = app_config::load_config(explicit)?;
    if let Some(backend) = backend {
        log::info!("Storage backend overridden to {backend}");
        config.storage.backend = backend;
    }
    Ok(config)
}

fn review(config: &AppConfig, file: Option<PathBuf>) -> Result<()> {
    let sink = ObjectStoreSink::from_config(&config.storage)
        .with_context(|| format!("Failed to set up {} storage", config.storage.backend))?;
    let mut app = ReviewApp::new(Arc::new(sink), config.storage.prefix.clone());

    if let Some(path) = file {
        app.dispatch(Action::Dataset(DatasetAction::OpenFile(path)));
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    terminal::run_session(&mut app, stdin.lock(), stdout.lock())
}

fn list(file: &Path) -> Result<()> {
    let loaded = load_dataset_file(file)
        .with_context(|| format!("Failed to load {}", file.display()))?;
    let mut out = io::stdout().lock();
    for entry in loaded.store.iter() {
        let reviewed = if entry.is_reviewed() { " (reviewed)" } else { "" };
        writeln!(out, "{:<10} {}{reviewed}", entry.uid, entry.label())?;
    }
    Ok(())
}

fn diff(file: &Path, uid: Option<&str>) -> Result<()> {
    let loaded = load_dataset_file(file)
        .with_context(|| format!("Failed to load {}", file.display()))?;
    let uid = match uid {
        Some(uid) => uid,
        None => loaded
            .store
            .first_uid()
            .ok_or_else(|| anyhow!("Dataset has no entries"))?,
    };
    let entry = loaded
        .store
        .get(uid)
        .ok_or_else(|| anyhow!("Entry not found: {uid}"))?;

    let (before, after) = highlight(&entry.original_section, &entry.agent_updated_section);
    let mut out = io::stdout().lock();
    writeln!(out, "{}", entry.label())?;
    writeln!(out, "Before: {before}")?;
    writeln!(out, "After:  {after}")?;
    Ok(())
}

fn init_config(explicit: Option<PathBuf>) -> Result<()> {
    let path = explicit.unwrap_or_else(app_config::config_path);
    if path.exists() {
        println!("Config already exists at {}", path.display());
        return Ok(());
    }
    app_config::save_config(&AppConfig::default(), &path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Wrote default config to {}", path.display());
    Ok(())
}
