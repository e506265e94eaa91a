/*
[INPUT]:  CLI arguments, per-user data directory, stored task snapshot
[OUTPUT]: Running taskdeck TUI with file-backed persistence and logging
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags, data paths, or startup flow
*/

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use taskdeck_core::{JsonFileStorage, TaskStore};
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use taskdeck_tui::runtime::run_tui;

#[derive(Parser, Debug)]
#[command(name = "taskdeck", version, about = "Local task list in the terminal")]
struct Cli {
    /// Task file to use instead of the default per-user location
    #[arg(long = "data-file", value_name = "PATH")]
    data_file: Option<PathBuf>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    let data_file = resolve_data_file(args.data_file)?;
    let data_dir = data_file
        .parent()
        .ok_or_else(|| anyhow!("data file {} has no parent directory", data_file.display()))?
        .to_path_buf();
    fs::create_dir_all(&data_dir).context("create data directory")?;

    // Logs go to a file; stdout belongs to the alternate screen.
    let _log_guard = init_tracing(&args.log_level, &data_dir)?;
    info!(data_file = %data_file.display(), "starting taskdeck");

    let store = TaskStore::open(JsonFileStorage::new(data_file));
    info!(task_count = store.total_count(), "task store loaded");

    run_tui(store).await?;
    info!("taskdeck exited");
    Ok(())
}

fn resolve_data_file(override_path: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = override_path {
        return Ok(path);
    }
    let data_dir = dirs::data_dir()
        .context("could not determine data directory")?
        .join("taskdeck");
    Ok(data_dir.join("tasks.json"))
}

fn init_tracing(log_level: &str, log_dir: &std::path::Path) -> Result<WorkerGuard> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    let appender = tracing_appender::rolling::never(log_dir, "taskdeck.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(guard)
}
