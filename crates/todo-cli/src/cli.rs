use clap::Parser;
use std::path::{Path, PathBuf};
use todo_core::AppConfig;
use tracing::Level;

#[derive(Parser, Debug)]
#[command(name = "todo")]
#[command(about = "A single-screen terminal todo list", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the todo data file (or set TODO_FILE env var)
    #[arg(value_name = "FILE", env = "TODO_FILE")]
    pub file: Option<PathBuf>,

    /// Storage key the list is saved under
    #[arg(long, value_name = "KEY")]
    pub key: Option<String>,
}

impl Cli {
    /// Command-line values win over the config file
    pub fn apply_to(&self, mut config: AppConfig) -> AppConfig {
        if let Some(ref file) = self.file {
            config.data_file = Some(file.clone());
        }
        if let Some(ref key) = self.key {
            config.storage_key = Some(key.clone());
        }
        config
    }
}

/// Where logs go and how verbose they are. An explicit debug log gets
/// everything; otherwise warnings land next to the data file.
pub fn log_target(debug_log: Option<PathBuf>, data_file: &Path) -> (PathBuf, Level) {
    match debug_log {
        Some(path) => (path, Level::DEBUG),
        None => (data_file.with_extension("log"), Level::WARN),
    }
}
