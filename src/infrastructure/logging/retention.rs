//! Count-based retention for log files
//!
//! Keeps the newest `keep` log files in a directory, judged by modification
//! time, and deletes the rest. Only files named `molsearch.*.log` (or plain
//! `molsearch.log`) are touched.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tracing::{debug, info, warn};

use super::logger::{LOG_FILE_PREFIX, LOG_FILE_SUFFIX};

/// Delete all but the `keep` most recent log files in `log_dir`.
///
/// `keep == 0` disables pruning. A missing directory is not an error.
///
/// # Returns
/// Number of files deleted
pub fn prune_log_files(log_dir: impl AsRef<Path>, keep: usize) -> Result<usize> {
    let log_dir = log_dir.as_ref();

    if keep == 0 {
        return Ok(0);
    }

    if !log_dir.exists() {
        warn!(path = %log_dir.display(), "log directory does not exist");
        return Ok(0);
    }

    let mut logs = collect_log_files(log_dir)?;
    if logs.len() <= keep {
        return Ok(0);
    }

    // Newest first; ties broken by name so the order is stable.
    logs.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| b.0.cmp(&a.0)));

    let mut deleted_count = 0;
    for (path, _) in logs.into_iter().skip(keep) {
        std::fs::remove_file(&path)
            .with_context(|| format!("failed to delete old log file {}", path.display()))?;
        debug!(path = %path.display(), "deleted old log file");
        deleted_count += 1;
    }

    if deleted_count > 0 {
        info!(count = deleted_count, keep, "cleaned up old log files");
    }

    Ok(deleted_count)
}

fn collect_log_files(log_dir: &Path) -> Result<Vec<(PathBuf, SystemTime)>> {
    let entries = std::fs::read_dir(log_dir)
        .with_context(|| format!("failed to read log directory {}", log_dir.display()))?;

    let mut logs = Vec::new();
    for entry in entries {
        let entry = entry.context("failed to read directory entry")?;
        let path = entry.path();

        if !is_log_file(&path) {
            continue;
        }

        let metadata = entry.metadata().context("failed to get file metadata")?;
        if !metadata.is_file() {
            continue;
        }

        let modified = metadata
            .modified()
            .context("failed to get file modification time")?;
        logs.push((path, modified));
    }

    Ok(logs)
}

fn is_log_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| {
            name.starts_with(&format!("{LOG_FILE_PREFIX}."))
                && name.ends_with(&format!(".{LOG_FILE_SUFFIX}"))
        })
}
