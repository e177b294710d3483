use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV_VAR: &str = "RESYNC_LOG";

fn level_from_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

fn filter(verbosity: u8) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(level_from_verbosity(verbosity).into())
        .with_env_var(LOG_ENV_VAR)
        .from_env_lossy()
}

/// Logs to stderr. A second call is a no-op.
pub fn init_stderr(verbosity: u8) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(verbosity))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Logs to an append-only file, for the console where stderr is covered by the
/// alternate screen.
pub fn init_file(verbosity: u8, path: &Path) -> Result<()> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(verbosity))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
    Ok(())
}
