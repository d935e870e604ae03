//! The version manager: mode resolution over the install record.
//!
//! [`resolve`] is the single decision point of the tool. It takes the loaded
//! [`InstallRecord`], the requested [`Mode`], and the already-fetched list of
//! available versions, and returns a [`Resolution`] describing what the shell
//! should do. It performs no I/O and never mutates the record; a successful
//! install is committed afterwards through
//! [`InstallRecord::record_install`](crate::config::InstallRecord::record_install).

use tracing::debug;

use crate::config::InstallRecord;
use crate::constants::{REPO_NAME, REPO_OWNER};
use crate::core::NeroError;
use crate::version::comparison::VersionComparator;

/// Requested operation, resolved from the CLI flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Install the newest available version.
    Latest,
    /// Install exactly this version, which must exist in the release feed.
    Explicit(String),
    /// Reinstall the previously recorded version.
    Rollback,
    /// Report current, previous, and latest versions; mutate nothing.
    Check,
    /// Update the record without downloading or installing. `None` means
    /// "record the latest available version".
    ConfigOnly(Option<String>),
}

/// Status summary produced by [`Mode::Check`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    /// Version currently recorded as installed.
    pub current: Option<String>,
    /// Version recorded as the rollback target.
    pub previous: Option<String>,
    /// Newest version in the release feed, if any parsed.
    pub latest: Option<String>,
}

/// What the shell should do next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Download and run the installer for `target`, then commit it to the
    /// record.
    Install {
        /// Normalized version to install.
        target: String,
    },
    /// The recorded version already is the target; take no action.
    UpToDate {
        /// The version that is already installed.
        current: String,
    },
    /// Print the status report; mutate nothing.
    Report(StatusReport),
    /// Write `version` into the record without installing anything.
    RecordOnly {
        /// Normalized version to record.
        version: String,
    },
}

/// Resolve a mode against the record and the available versions.
///
/// `available` is only consulted by the modes that need it (`Latest`,
/// `Explicit`, `Check`, and `ConfigOnly(None)`); `Rollback` and
/// `ConfigOnly(Some)` work offline and accept an empty slice.
///
/// # Errors
///
/// - [`NeroError::NoReleasesAvailable`] when a mode needs the release list
///   and it is empty (or contains nothing parseable)
/// - [`NeroError::VersionNotFound`] when an explicit version is not in the
///   list
/// - [`NeroError::NoPreviousVersion`] on rollback without recorded history
pub fn resolve(
    record: &InstallRecord,
    mode: &Mode,
    available: &[String],
) -> Result<Resolution, NeroError> {
    match mode {
        Mode::Latest => {
            let target = latest_of(available)?;
            if let Some(current) = &record.current_version {
                if VersionComparator::same(current, &target) {
                    debug!("already on latest version {current}");
                    return Ok(Resolution::UpToDate {
                        current: current.clone(),
                    });
                }
            }
            Ok(Resolution::Install { target })
        }

        Mode::Explicit(requested) => {
            if available.is_empty() {
                return Err(no_releases());
            }
            let normalized = VersionComparator::normalize(requested);
            if available.iter().any(|v| VersionComparator::same(v, normalized)) {
                Ok(Resolution::Install {
                    target: normalized.to_string(),
                })
            } else {
                Err(NeroError::VersionNotFound {
                    version: requested.clone(),
                })
            }
        }

        Mode::Rollback => match &record.previous_version {
            Some(previous) => Ok(Resolution::Install {
                target: previous.clone(),
            }),
            None => Err(NeroError::NoPreviousVersion),
        },

        Mode::Check => Ok(Resolution::Report(StatusReport {
            current: record.current_version.clone(),
            previous: record.previous_version.clone(),
            latest: VersionComparator::latest(available).cloned(),
        })),

        Mode::ConfigOnly(requested) => {
            let version = match requested {
                Some(v) => VersionComparator::normalize(v).to_string(),
                None => latest_of(available)?,
            };
            Ok(Resolution::RecordOnly { version })
        }
    }
}

fn latest_of(available: &[String]) -> Result<String, NeroError> {
    VersionComparator::latest(available)
        .map(|v| VersionComparator::normalize(v).to_string())
        .ok_or_else(no_releases)
}

fn no_releases() -> NeroError {
    NeroError::NoReleasesAvailable {
        owner: REPO_OWNER.to_string(),
        repo: REPO_NAME.to_string(),
    }
}
