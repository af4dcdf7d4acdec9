//! Log setup for the demo binary.
//!
//! Stdout carries the demo transcript only. Diagnostics go to a log file, or
//! to stderr at `warn` when no log directory is usable.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const LOG_FILE: &str = "rpg-demo.log";

/// Installs the global subscriber.
///
/// The returned guard flushes the file writer on drop and must be kept alive
/// for the lifetime of the program.
pub fn setup_logging(log_dir: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let log_dir = log_dir.map(Path::to_path_buf).or_else(default_log_directory);

    let Some(dir) = log_dir else {
        setup_stderr_logging()?;
        return Ok(None);
    };

    let file_appender = match prepare_log_dir(&dir).and_then(|dir| open_log_file(&dir)) {
        Ok(appender) => appender,
        Err(err) => {
            setup_stderr_logging()?;
            tracing::warn!("File logging disabled: {:#}", err);
            return Ok(None);
        }
    };
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    tracing::info!("Log file: {}", dir.join(LOG_FILE).display());
    Ok(Some(guard))
}

fn setup_stderr_logging() -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .context("failed to install tracing subscriber")
}

/// Creates the log directory if needed.
pub fn prepare_log_dir(dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("cannot create log directory {}", dir.display()))?;
    Ok(dir.to_path_buf())
}

/// Opens `rpg-demo.log` inside `dir` without rotation.
pub fn open_log_file(dir: &Path) -> Result<RollingFileAppender> {
    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_FILE)
        .build(dir)
        .with_context(|| format!("cannot open {}", dir.join(LOG_FILE).display()))
}

/// Platform cache directory, e.g. `~/.cache/rpg-demo/logs` on Linux.
pub fn default_log_directory() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "rpg-demo").map(|dirs| dirs.cache_dir().join("logs"))
}
