//! Installer artifact download.
//!
//! Fetches the release zip for a resolved version into the download
//! directory, streaming the body to disk with a progress bar. The download
//! directory is resolved flag > record override > system temp dir, and is
//! probed for writability before any bytes move.

use anyhow::{Context, Result};
use futures::StreamExt;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

use crate::config::InstallRecord;
use crate::constants::{
    ENV_DOWNLOAD_BASE, GITHUB_DOWNLOAD_BASE, REPO_NAME, REPO_OWNER, USER_AGENT,
    installer_asset_name,
};
use crate::core::NeroError;
use crate::utils::fs::{ensure_dir, is_writable};

/// Resolve where downloads should land.
///
/// Precedence: explicit `--download-dir` flag, then the record's stored
/// override, then the system temp directory.
#[must_use]
pub fn resolve_download_dir(flag: Option<&Path>, record: &InstallRecord) -> PathBuf {
    flag.map(Path::to_path_buf)
        .or_else(|| record.download_dir.clone())
        .unwrap_or_else(std::env::temp_dir)
}

/// Downloads installer artifacts from the upstream release feed.
pub struct Downloader {
    http: reqwest::Client,
    base_url: String,
}

impl Downloader {
    /// Create a downloader against the real release download host (or the
    /// `NERO_DOWNLOAD_BASE` override when set).
    pub fn new() -> Result<Self> {
        let base_url =
            std::env::var(ENV_DOWNLOAD_BASE).unwrap_or_else(|_| GITHUB_DOWNLOAD_BASE.to_string());
        Self::with_base_url(base_url)
    }

    /// Create a downloader against a specific base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    /// Download URL for a normalized version.
    #[must_use]
    pub fn asset_url(&self, version: &str) -> String {
        format!(
            "{}/{}/{}/releases/download/v{}/{}",
            self.base_url,
            REPO_OWNER,
            REPO_NAME,
            version,
            installer_asset_name(version)
        )
    }

    /// Fetch the installer zip for `version` into `dir`.
    ///
    /// Returns the path of the downloaded archive. The method streams the
    /// response body to disk, so partially transferred files are possible on
    /// failure; callers treat any error as fatal and report it.
    pub async fn fetch(&self, version: &str, dir: &Path) -> Result<PathBuf> {
        ensure_dir(dir)?;
        if !is_writable(dir) {
            return Err(NeroError::PermissionDenied {
                operation: "download installer".to_string(),
                path: dir.display().to_string(),
            }
            .into());
        }

        let url = self.asset_url(version);
        let target = dir.join(installer_asset_name(version));
        info!("downloading {url} to {}", target.display());

        let response =
            self.http
                .get(&url)
                .send()
                .await
                .map_err(|e| NeroError::DownloadFailed {
                    url: url.clone(),
                    reason: e.to_string(),
                })?;

        let status = response.status();
        if !status.is_success() {
            return Err(NeroError::DownloadFailed {
                url,
                reason: format!("server returned {status}"),
            }
            .into());
        }

        let total = response.content_length().unwrap_or(0);
        let bar = progress_bar(total);

        let mut file = tokio::fs::File::create(&target)
            .await
            .with_context(|| format!("Failed to create {}", target.display()))?;

        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| NeroError::DownloadFailed {
                url: url.clone(),
                reason: e.to_string(),
            })?;
            file.write_all(&chunk)
                .await
                .with_context(|| format!("Failed to write {}", target.display()))?;
            bar.inc(chunk.len() as u64);
        }

        file.flush().await.context("Failed to flush download")?;
        bar.finish_and_clear();

        debug!("download complete: {}", target.display());
        Ok(target)
    }
}

fn progress_bar(total: u64) -> ProgressBar {
    let bar = if total > 0 {
        ProgressBar::new(total)
    } else {
        ProgressBar::new_spinner()
    };
    if let Ok(style) =
        ProgressStyle::with_template("{bar:40.cyan/blue} {bytes}/{total_bytes} ({eta})")
    {
        bar.set_style(style.progress_chars("=>-"));
    }
    bar
}
