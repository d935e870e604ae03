//! Installer extraction, invocation, and cleanup.
//!
//! The downloaded artifact is a zip containing an `InvokeAI-Installer`
//! directory with platform launch scripts. This module unpacks it into a
//! temporary directory, runs the right script for the platform, and
//! propagates the exit status. The temporary extraction directory is removed
//! when the [`tempfile::TempDir`] guard drops; the downloaded zip itself is
//! cleaned up separately so `--keep` can retain it.

pub mod download;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::process::Command;
use tracing::{debug, info, warn};

use crate::constants::INSTALLER_DIR_NAME;
use crate::core::NeroError;

pub use download::{Downloader, resolve_download_dir};

/// Extract the installer archive and run its launch script.
///
/// Blocks (on the async executor's blocking pool) for the unzip, then waits
/// on the installer subprocess. A non-zero exit status is reported as
/// [`NeroError::InstallerLaunchFailed`].
pub async fn run_installer(archive: &Path) -> Result<()> {
    let extract_dir = tempfile::tempdir().context("Failed to create extraction directory")?;

    info!("extracting {} to {}", archive.display(), extract_dir.path().display());
    let archive_path = archive.to_path_buf();
    let dest = extract_dir.path().to_path_buf();
    tokio::task::spawn_blocking(move || extract_zip(&archive_path, &dest))
        .await
        .context("Extraction task panicked")??;

    let installer_dir = extract_dir.path().join(INSTALLER_DIR_NAME);
    if !installer_dir.is_dir() {
        return Err(NeroError::InstallerLaunchFailed {
            reason: format!("archive does not contain a {INSTALLER_DIR_NAME} directory"),
        }
        .into());
    }

    let status = launch_script(&installer_dir)
        .await
        .map_err(|e| NeroError::InstallerLaunchFailed {
            reason: e.to_string(),
        })?;

    if !status.success() {
        return Err(NeroError::InstallerLaunchFailed {
            reason: match status.code() {
                Some(code) => format!("installer exited with status {code}"),
                None => "installer terminated by signal".to_string(),
            },
        }
        .into());
    }

    debug!("installer completed successfully");
    Ok(())
}

async fn launch_script(installer_dir: &Path) -> std::io::Result<std::process::ExitStatus> {
    let mut command = if cfg!(windows) {
        let mut c = Command::new("cmd");
        c.args(["/C", "install.bat"]);
        c
    } else {
        Command::new("./install.sh")
    };

    command.current_dir(installer_dir).status().await
}

fn extract_zip(archive: &Path, dest: &Path) -> Result<()> {
    let file = std::fs::File::open(archive)
        .with_context(|| format!("Failed to open archive {}", archive.display()))?;
    let mut zip = zip::ZipArchive::new(file)
        .with_context(|| format!("Failed to read archive {}", archive.display()))?;
    zip.extract(dest)
        .with_context(|| format!("Failed to extract archive to {}", dest.display()))?;
    Ok(())
}

/// Remove the downloaded archive unless the user asked to keep it.
///
/// Windows occasionally holds the file locked briefly after the installer
/// exits, so removal is retried a few times before giving up with a warning.
/// Cleanup failure never fails the run.
pub async fn cleanup_archive(archive: &Path, keep: bool) {
    if keep {
        info!("keeping downloaded archive at {}", archive.display());
        return;
    }
    if !archive.exists() {
        return;
    }

    for attempt in 1..=5u32 {
        match tokio::fs::remove_file(archive).await {
            Ok(()) => {
                debug!("removed {}", archive.display());
                return;
            }
            Err(e) if attempt < 5 => {
                debug!("failed to remove {} (attempt {attempt}): {e}", archive.display());
                tokio::time::sleep(Duration::from_secs(1)).await;
            }
            Err(e) => {
                warn!("could not remove {}: {e}", archive.display());
            }
        }
    }
}

/// Location the archive for `version` would occupy in `dir`.
///
/// Used by dry-run reporting, which must not touch the network or the disk.
#[must_use]
pub fn planned_archive_path(version: &str, dir: &Path) -> PathBuf {
    dir.join(crate::constants::installer_asset_name(version))
}
