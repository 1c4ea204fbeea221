use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Where and how verbosely to log
#[derive(Debug, Clone, Default)]
pub struct LogOptions {
    pub verbose: bool,
    pub log_dir: Option<PathBuf>, // Log to a timestamped file here instead of stderr
}

/// Name of the log file for a run started at `started`
pub fn log_file_name(started: DateTime<Local>) -> String {
    format!("identify_{}.log", started.format("%Y%m%d_%H%M%S"))
}

pub fn init_logger(options: &LogOptions) -> Result<()> {
    // RUST_LOG wins over the verbosity flag
    let default_level = if options.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    match &options.log_dir {
        Some(dir) => {
            let log_file = create_log_file(dir)?;
            let subscriber = FmtSubscriber::builder()
                .with_env_filter(filter)
                .with_file(true)
                .with_line_number(true)
                .with_thread_ids(true)
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(fs::File::create(&log_file)?))
                .finish();
            tracing::subscriber::set_global_default(subscriber)
                .context("Failed to install logger")?;
            info!("Logger initialized, writing to {}", log_file.display());
        }
        None => {
            let subscriber = FmtSubscriber::builder()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .finish();
            tracing::subscriber::set_global_default(subscriber)
                .context("Failed to install logger")?;
        }
    }

    Ok(())
}

fn create_log_file(log_dir: &Path) -> Result<PathBuf> {
    // Create log directory if it doesn't exist
    if !log_dir.exists() {
        fs::create_dir_all(log_dir)
            .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;
    }
    Ok(log_dir.join(log_file_name(Local::now())))
}
