mod splitter;

pub use splitter::MessageSplitter;

use anyhow::{Context, Result};
use chrono::Local;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::ForumfmtConfig;
use crate::generator::Platform;

/// Where rendered markup goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    File(PathBuf),
    /// Timestamped file under the configured output directory
    Archive,
}

/// Cut `text` into message-sized chunks when the platform has a limit and
/// splitting was asked for
pub fn chunks(text: &str, platform: Platform, split: bool) -> Vec<&str> {
    match platform.message_limit() {
        Some(limit) if split => MessageSplitter::new(limit, true).split(text),
        _ => vec![text],
    }
}

/// Join chunks with a numbered cut line between messages
pub fn join_chunks(chunks: &[&str]) -> String {
    if chunks.len() <= 1 {
        return chunks.concat();
    }
    let total = chunks.len();
    chunks
        .iter()
        .enumerate()
        .map(|(i, chunk)| format!("----- message {}/{total} -----\n{chunk}", i + 1))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn route(
    text: &str,
    platform: Platform,
    split: bool,
    destination: &Destination,
    config: &ForumfmtConfig,
) -> Result<()> {
    let parts = chunks(text, platform, split);
    if parts.len() > 1 {
        tracing::info!(
            component = "output",
            platform = %platform,
            messages = parts.len(),
            "Split output into messages"
        );
    }
    let body = join_chunks(&parts);

    match destination {
        Destination::Stdout => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{body}").context("Failed to write to stdout")?;
        }
        Destination::File(path) => save_to_file(path, &body)?,
        Destination::Archive => {
            let path = archive_path(&config.paths.output_dir(), platform);
            save_to_file(&path, &body)?;
            println!("Saved to: {}", path.display());
        }
    }
    Ok(())
}

fn archive_path(output_dir: &Path, platform: Platform) -> PathBuf {
    let timestamp = Local::now().format("%Y-%m-%d_%H-%M-%S");
    output_dir.join(format!("{timestamp}_{platform}.txt"))
}

fn save_to_file(path: &Path, body: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    std::fs::write(path, format!("{body}\n"))
        .with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!(component = "output", path = %path.display(), "Output saved");
    Ok(())
}
