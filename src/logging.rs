//! Logging setup for forumfmt.
//!
//! Structured JSON lines go to `logs/forumfmt.jsonl` under the base
//! directory (`~/.forumfmt` unless configured). With
//! `--verbose` a human-readable layer is added on stderr.

use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_STEM: &str = "forumfmt";

/// The JSONL log inside the configured logs directory
#[derive(Debug, Clone)]
pub struct LogFile {
    path: PathBuf,
}

impl LogFile {
    pub fn in_dir(logs_dir: &Path) -> Self {
        Self {
            path: logs_dir.join(format!("{LOG_STEM}.jsonl")),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Bytes on disk; 0 before the first run has logged anything
    pub fn size(&self) -> Result<u64> {
        match fs::metadata(&self.path) {
            Ok(meta) => Ok(meta.len()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(0),
            Err(e) => Err(e)
                .with_context(|| format!("Failed to stat log file {}", self.path.display())),
        }
    }

    pub fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::write(&self.path, "")
                .with_context(|| format!("Failed to clear {}", self.path.display()))?;
        }
        Ok(())
    }

    /// Move the log aside as `forumfmt-<timestamp>.jsonl`. The next run
    /// starts a fresh file.
    pub fn rotate(&self) -> Result<PathBuf> {
        if !self.path.exists() {
            anyhow::bail!("No log file at {}", self.path.display());
        }
        let timestamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
        let rotated = self
            .path
            .with_file_name(format!("{LOG_STEM}-{timestamp}.jsonl"));
        fs::rename(&self.path, &rotated)
            .with_context(|| format!("Failed to rotate {}", self.path.display()))?;
        Ok(rotated)
    }
}

/// Initialize logging. Returns a guard that must be held until exit so the
/// non-blocking writer flushes.
pub fn init_logging(log: &LogFile, verbose: bool) -> Result<WorkerGuard> {
    if let Some(dir) = log.path().parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create logs directory {}", dir.display()))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log.path())
        .with_context(|| format!("Failed to open log file {}", log.path().display()))?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    let default_level = if verbose { "debug" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let stderr_layer = verbose.then(|| {
        fmt::layer()
            .with_target(true)
            .with_writer(std::io::stderr)
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .json()
                .with_file(true)
                .with_line_number(true)
                .with_target(true)
                .with_writer(non_blocking),
        )
        .with(stderr_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(guard)
}

/// Human-readable size in binary units
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 3] = ["KB", "MB", "GB"];
    if bytes < 1024 {
        return format!("{bytes} bytes");
    }
    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit + 1 < UNITS.len() {
        value /= 1024.0;
        unit += 1;
    }
    format!("{value:.2} {}", UNITS[unit])
}
