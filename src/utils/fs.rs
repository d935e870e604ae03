//! File system helpers: atomic writes and directory checks.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Creates a directory and all parent directories if they don't exist.
pub fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path)
        .with_context(|| format!("Failed to create directory: {}", path.display()))
}

/// Atomically writes bytes to a file using a write-then-rename strategy.
///
/// The content is written to a temporary sibling file (`.tmp` extension),
/// synced to disk, and then renamed over the target path. An interrupted run
/// therefore never leaves the target file partially written; readers see
/// either the old content or the new content, nothing in between.
///
/// Parent directories are created automatically.
pub fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    use std::io::Write;

    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }

    let temp_path = path.with_extension("tmp");

    {
        let mut file = fs::File::create(&temp_path)
            .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;

        file.write_all(content)
            .with_context(|| format!("Failed to write to temp file: {}", temp_path.display()))?;

        file.sync_all().context("Failed to sync file to disk")?;
    }

    fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to rename temp file to: {}", path.display()))?;

    Ok(())
}

/// Checks whether the given directory is writable by the current process.
///
/// Probes by creating and removing a throwaway file, which works uniformly
/// across platforms (plain permission bits are unreliable on Windows and
/// under ACLs).
#[must_use]
pub fn is_writable(dir: &Path) -> bool {
    let probe = dir.join(format!(".nero-write-probe-{}", std::process::id()));
    match fs::File::create(&probe) {
        Ok(_) => {
            let _ = fs::remove_file(&probe);
            true
        }
        Err(_) => false,
    }
}
