mod cli;

use clap::Parser;
use cli::{log_target, Cli};
use std::path::PathBuf;
use std::sync::Arc;
use todo_core::AppConfig;
use todo_persistence::JsonFileStore;
use todo_store::{Hydration, ListStoreController};
use todo_tui::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.apply_to(AppConfig::load());
    let data_file = config.effective_data_file();

    // The TUI owns the terminal, so logs always go to a file
    let debug_log = std::env::var_os("TODO_DEBUG_LOG").map(PathBuf::from);
    let (log_path, level) = log_target(debug_log, &data_file);
    if let Some(dir) = log_path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)?;
    }
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_max_level(level)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false)
        .init();

    tracing::info!("Using data file {}", data_file.display());

    let store = Arc::new(JsonFileStore::new(&data_file));
    let (controller, worker) = ListStoreController::new(store, config.effective_storage_key());
    let saves = worker.spawn();

    let mut app = App::new(controller);
    if let Hydration::Restored(count) = app.hydrate().await {
        tracing::debug!("Restored {} todos from {}", count, data_file.display());
    }

    let result = app.run().await;

    // Flush queued writes before exiting
    app.controller.close_save_channel();
    drop(app);
    let stats = saves.await?;
    if stats.failed > 0 {
        tracing::warn!("{} saves failed during this session", stats.failed);
    }

    result?;
    Ok(())
}
