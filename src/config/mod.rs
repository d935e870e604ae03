//! Persisted install record.
//!
//! The record is the only state nero keeps between runs: which version is
//! currently installed, which one it replaced, an optional download
//! directory override, and when the record was last touched. It is stored as
//! a small JSON file at the platform configuration directory and is loaded
//! once per invocation, mutated at most once, and written back atomically.
//!
//! # Location
//!
//! - Unix/macOS: `~/.config/nero/nero.json` (platform config dir)
//! - Windows: `%APPDATA%\nero\nero.json`
//!
//! The directory can be overridden with the `NERO_CONFIG_DIR` environment
//! variable, which the test suite uses for isolation.
//!
//! # Invariant
//!
//! `previous_version`, when present, was once `current_version`. The only
//! place the pair changes together is [`InstallRecord::record_install`],
//! which shifts the old current version into the previous slot.

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

use crate::constants::{ENV_CONFIG_DIR, RECORD_FILE_NAME};
use crate::core::NeroError;
use crate::utils::fs::atomic_write;

/// The on-disk install record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InstallRecord {
    /// Version currently installed, absent before the first install.
    #[serde(default)]
    pub current_version: Option<String>,

    /// Version that `current_version` replaced, absent until a second
    /// install has happened.
    #[serde(default)]
    pub previous_version: Option<String>,

    /// Optional override for where installer downloads are cached.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_dir: Option<PathBuf>,

    /// When the record was last mutated.
    #[serde(default)]
    pub last_update: Option<DateTime<Utc>>,
}

impl InstallRecord {
    /// Load the record from the default location.
    ///
    /// A missing file is not an error; it loads as the default (empty)
    /// record, matching a machine that has never installed anything.
    pub async fn load() -> Result<Self> {
        let path = Self::default_path()?;
        if path.exists() {
            Self::load_from(&path).await
        } else {
            debug!("no install record at {}, starting empty", path.display());
            Ok(Self::default())
        }
    }

    /// Load the record from a specific file path.
    pub async fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).await.map_err(|e| {
            NeroError::RecordReadWriteFailed {
                operation: "read".to_string(),
                path: path.display().to_string(),
                reason: e.to_string(),
            }
        })?;

        let record = serde_json::from_str(&content).map_err(|e| {
            NeroError::RecordReadWriteFailed {
                operation: "parse".to_string(),
                path: path.display().to_string(),
                reason: e.to_string(),
            }
        })?;

        Ok(record)
    }

    /// Save the record to the default location.
    pub async fn save(&self) -> Result<()> {
        let path = Self::default_path()?;
        self.save_to(&path)
    }

    /// Save the record to a specific file path, atomically.
    ///
    /// Uses write-to-temp-then-rename so an interrupted run never leaves a
    /// partially written record behind.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self).map_err(NeroError::from)?;

        atomic_write(path, content.as_bytes()).map_err(|e| {
            NeroError::RecordReadWriteFailed {
                operation: "write".to_string(),
                path: path.display().to_string(),
                reason: format!("{e:#}"),
            }
        })?;

        debug!("saved install record to {}", path.display());
        Ok(())
    }

    /// Record a successful install of `version`.
    ///
    /// Shifts the old `current_version` into `previous_version` and stamps
    /// `last_update`. This is the only mutation path for the version pair,
    /// which is what keeps the previous-was-once-current invariant true.
    pub fn record_install(&mut self, version: &str) {
        self.previous_version = self.current_version.take();
        self.current_version = Some(version.to_string());
        self.last_update = Some(Utc::now());
    }

    /// Default path for the record file.
    ///
    /// Honors the `NERO_CONFIG_DIR` override, otherwise resolves the
    /// platform configuration directory.
    pub fn default_path() -> Result<PathBuf> {
        let dir = if let Ok(dir) = std::env::var(ENV_CONFIG_DIR) {
            PathBuf::from(dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| anyhow::anyhow!("Unable to determine configuration directory"))?
                .join("nero")
        };

        Ok(dir.join(RECORD_FILE_NAME))
    }
}
