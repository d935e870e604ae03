//! Global constants used throughout the nero codebase.
//!
//! Upstream repository coordinates, asset naming, and the environment
//! variable overrides used by tests. Defining them centrally keeps the
//! release client, the downloader, and the CLI shell in agreement about
//! where releases live and what the installer artifact is called.

/// GitHub owner of the upstream project.
pub const REPO_OWNER: &str = "invoke-ai";

/// GitHub repository name of the upstream project.
pub const REPO_NAME: &str = "InvokeAI";

/// User agent sent with every HTTP request.
pub const USER_AGENT: &str = concat!("nero/", env!("CARGO_PKG_VERSION"));

/// Default base URL for the GitHub REST API.
pub const GITHUB_API_BASE: &str = "https://api.github.com";

/// Default base URL for release asset downloads.
pub const GITHUB_DOWNLOAD_BASE: &str = "https://github.com";

/// Environment override for the install record directory.
///
/// Points at a directory; the record file `nero.json` is created inside it.
/// Used by the integration tests to isolate runs from the real config.
pub const ENV_CONFIG_DIR: &str = "NERO_CONFIG_DIR";

/// Environment override for the GitHub API base URL (tests).
pub const ENV_GITHUB_API: &str = "NERO_GITHUB_API";

/// Environment override for the asset download base URL (tests).
pub const ENV_DOWNLOAD_BASE: &str = "NERO_DOWNLOAD_BASE";

/// File name of the persisted install record.
pub const RECORD_FILE_NAME: &str = "nero.json";

/// Directory the installer archive unpacks into, as published upstream.
pub const INSTALLER_DIR_NAME: &str = "InvokeAI-Installer";

/// Build the installer archive name for a given (normalized) version.
///
/// Upstream publishes one platform-independent zip per release, e.g.
/// `InvokeAI-installer-v5.7.0.zip`.
pub fn installer_asset_name(version: &str) -> String {
    format!("InvokeAI-installer-v{version}.zip")
}
