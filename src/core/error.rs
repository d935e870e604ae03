//! Error handling for nero.
//!
//! The error system is designed around two core principles:
//! 1. **Strongly-typed errors** for precise handling in code
//! 2. **User-friendly messages** with actionable suggestions for CLI users
//!
//! # Architecture
//!
//! Two main types:
//! - [`NeroError`] - Enumerated error types for all failure cases
//! - [`ErrorContext`] - Wrapper that adds user-friendly messages and suggestions
//!
//! Every error kind maps to a distinct process exit code via
//! [`NeroError::exit_code`], so scripts driving `nero` can tell a missing
//! version apart from a failed download without parsing stderr. Common
//! standard library errors are converted automatically:
//! - [`std::io::Error`] → [`NeroError::IoError`]
//! - [`serde_json::Error`] → [`NeroError::JsonError`]
//! - [`semver::Error`] → [`NeroError::SemverError`]
//!
//! Use [`user_friendly_error`] at the top of `main` to convert any
//! [`anyhow::Error`] into a displayable context with suggestions.

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for nero operations.
///
/// Each variant represents a specific failure mode with enough context to
/// produce an actionable message. Variants map one-to-one onto the failure
/// kinds the tool can hit: version selection, release listing, download,
/// installer launch, and record persistence.
#[derive(Error, Debug)]
pub enum NeroError {
    /// The requested version does not exist in the release feed.
    #[error("Version '{version}' not found in the available releases")]
    VersionNotFound {
        /// The version string that was requested.
        version: String,
    },

    /// Rollback was requested but the record has no previous version.
    #[error("No previous version recorded; nothing to roll back to")]
    NoPreviousVersion,

    /// The release feed returned no usable releases.
    #[error("No releases found for {owner}/{repo}")]
    NoReleasesAvailable {
        /// Upstream repository owner.
        owner: String,
        /// Upstream repository name.
        repo: String,
    },

    /// Downloading the installer artifact failed.
    #[error("Failed to download installer from {url}")]
    DownloadFailed {
        /// The URL that was being fetched.
        url: String,
        /// The reason the download failed.
        reason: String,
    },

    /// The installer subprocess could not be launched or exited non-zero.
    #[error("Installer failed: {reason}")]
    InstallerLaunchFailed {
        /// Description of the launch failure or exit status.
        reason: String,
    },

    /// The install record could not be read or written.
    #[error("Failed to {operation} install record at {path}")]
    RecordReadWriteFailed {
        /// The operation that failed ("read", "parse", or "write").
        operation: String,
        /// Path to the record file.
        path: String,
        /// Underlying reason.
        reason: String,
    },

    /// A network operation other than an asset download failed.
    #[error("Network error during {operation}")]
    NetworkError {
        /// The network operation that failed.
        operation: String,
        /// Reason for the failure.
        reason: String,
    },

    /// Insufficient permissions for a file system operation.
    #[error("Permission denied: {operation} in {path}")]
    PermissionDenied {
        /// The operation that was denied.
        operation: String,
        /// Path where permission was denied.
        path: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Semver parsing error.
    #[error("Semver parsing error: {0}")]
    SemverError(#[from] semver::Error),

    /// Other error.
    #[error("{message}")]
    Other {
        /// Generic error message.
        message: String,
    },
}

impl NeroError {
    /// Process exit code for this error kind.
    ///
    /// `0` is reserved for success (including "already up to date"); every
    /// failure kind gets a distinct non-zero code so callers can branch on
    /// the outcome without parsing messages.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::VersionNotFound { .. } => 2,
            Self::NoPreviousVersion => 3,
            Self::NoReleasesAvailable { .. } => 4,
            Self::DownloadFailed { .. } => 5,
            Self::InstallerLaunchFailed { .. } => 6,
            Self::RecordReadWriteFailed { .. } => 7,
            _ => 1,
        }
    }
}

impl Clone for NeroError {
    fn clone(&self) -> Self {
        match self {
            Self::VersionNotFound { version } => Self::VersionNotFound {
                version: version.clone(),
            },
            Self::NoPreviousVersion => Self::NoPreviousVersion,
            Self::NoReleasesAvailable { owner, repo } => Self::NoReleasesAvailable {
                owner: owner.clone(),
                repo: repo.clone(),
            },
            Self::DownloadFailed { url, reason } => Self::DownloadFailed {
                url: url.clone(),
                reason: reason.clone(),
            },
            Self::InstallerLaunchFailed { reason } => Self::InstallerLaunchFailed {
                reason: reason.clone(),
            },
            Self::RecordReadWriteFailed {
                operation,
                path,
                reason,
            } => Self::RecordReadWriteFailed {
                operation: operation.clone(),
                path: path.clone(),
                reason: reason.clone(),
            },
            Self::NetworkError { operation, reason } => Self::NetworkError {
                operation: operation.clone(),
                reason: reason.clone(),
            },
            Self::PermissionDenied { operation, path } => Self::PermissionDenied {
                operation: operation.clone(),
                path: path.clone(),
            },
            // Errors that don't implement Clone are flattened to Other
            Self::IoError(e) => Self::Other {
                message: format!("IO error: {e}"),
            },
            Self::JsonError(e) => Self::Other {
                message: format!("JSON error: {e}"),
            },
            Self::SemverError(e) => Self::Other {
                message: format!("Semver parsing error: {e}"),
            },
            Self::Other { message } => Self::Other {
                message: message.clone(),
            },
        }
    }
}

/// Error context wrapper that provides user-friendly error information.
///
/// Wraps a [`NeroError`] and adds optional suggestions and details. When
/// displayed, errors show:
/// 1. **Error**: the main message in red
/// 2. **Details**: additional context in yellow (optional)
/// 3. **Suggestion**: actionable steps in green (optional)
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error.
    pub error: NeroError,
    /// Optional suggestion for resolving the error.
    pub suggestion: Option<String>,
    /// Optional additional details about the error.
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context from a [`NeroError`].
    #[must_use]
    pub const fn new(error: NeroError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add additional details explaining the error.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Process exit code for the wrapped error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        self.error.exit_code()
    }

    /// Display the error context to stderr with terminal colors.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error to a user-friendly [`ErrorContext`] with suggestions.
///
/// The main entry point for rendering errors at the CLI boundary. Recognizes
/// [`NeroError`] variants and common [`std::io::Error`] kinds; everything
/// else is wrapped with its message intact (and an exit code of 1).
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    if let Some(nero_error) = error.downcast_ref::<NeroError>() {
        return create_error_context(nero_error.clone());
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        match io_error.kind() {
            std::io::ErrorKind::PermissionDenied => {
                return ErrorContext::new(NeroError::PermissionDenied {
                    operation: "file access".to_string(),
                    path: "unknown".to_string(),
                })
                .with_suggestion(
                    "Check file ownership or re-run with elevated permissions",
                )
                .with_details("nero could not read or write a file it needs");
            }
            std::io::ErrorKind::NotFound => {
                return ErrorContext::new(NeroError::Other {
                    message: format!("File not found: {io_error}"),
                })
                .with_suggestion("Check that the path exists and is spelled correctly");
            }
            _ => {}
        }
    }

    ErrorContext::new(NeroError::Other {
        message: format!("{error:#}"),
    })
}

fn create_error_context(error: NeroError) -> ErrorContext {
    match &error {
        NeroError::VersionNotFound { .. } => ErrorContext::new(error.clone())
            .with_suggestion("Run `nero --list-versions` to see the releases that exist")
            .with_details("The requested version has no release tag in the upstream feed"),
        NeroError::NoPreviousVersion => ErrorContext::new(error.clone())
            .with_suggestion("Install a release first; rollback needs a prior install on record")
            .with_details("The install record only tracks one level of history"),
        NeroError::NoReleasesAvailable { .. } => ErrorContext::new(error.clone())
            .with_suggestion("Check that the upstream repository still publishes releases"),
        NeroError::DownloadFailed { .. } => ErrorContext::new(error.clone())
            .with_suggestion("Check your network connection and re-run the command")
            .with_details("Downloads are not retried automatically"),
        NeroError::InstallerLaunchFailed { .. } => ErrorContext::new(error.clone())
            .with_suggestion("Re-run with --verbose to see the installer output"),
        NeroError::RecordReadWriteFailed { path, .. } => {
            let details = format!("The install record lives at {path}");
            ErrorContext::new(error.clone())
                .with_suggestion("Check permissions on the configuration directory")
                .with_details(details)
        }
        NeroError::NetworkError { .. } => ErrorContext::new(error.clone())
            .with_suggestion("Check your network connection and GitHub availability"),
        NeroError::PermissionDenied { path, .. } => {
            let details = format!("No write access to {path}");
            ErrorContext::new(error.clone())
                .with_suggestion("Pick a writable directory with --download-dir")
                .with_details(details)
        }
        _ => ErrorContext::new(error.clone()),
    }
}
