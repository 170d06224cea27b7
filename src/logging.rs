//! File-backed tracing setup. The terminal belongs to the UI, so log lines
//! never go to stdout or stderr while it runs.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Default log location: `<cache dir>/shopfront/shopfront.log`.
pub fn default_log_path() -> PathBuf {
    let cache_dir = dirs::cache_dir().unwrap_or_else(|| PathBuf::from("."));
    cache_dir.join("shopfront").join("shopfront.log")
}

/// Resolves the log file path from config, falling back to [`default_log_path`].
pub fn log_path(config: &LoggingConfig) -> PathBuf {
    config
        .file
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(default_log_path)
}

/// `RUST_LOG` wins over the configured level.
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

pub fn init_tracing(config: &LoggingConfig) -> io::Result<PathBuf> {
    let path = log_path(config);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(Mutex::new(file))
        .init();

    Ok(path)
}
