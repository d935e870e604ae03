//! GitHub release feed client.
//!
//! Thin wrapper over the GitHub REST API that turns the upstream release
//! feed into a list of normalized version identifiers (leading `v`
//! stripped). This is the "release-list provider" collaborator: the version
//! manager only ever sees the plain strings it returns.
//!
//! The base URL is injectable so tests can point the client at a local mock
//! server; the `NERO_GITHUB_API` environment variable provides the same hook
//! for the compiled binary.

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use crate::constants::{ENV_GITHUB_API, GITHUB_API_BASE, REPO_NAME, REPO_OWNER, USER_AGENT};
use crate::core::NeroError;
use crate::version::VersionComparator;

/// A single release as returned by the GitHub API.
#[derive(Debug, Deserialize)]
pub struct Release {
    /// Tag name, e.g. `"v5.7.0"`.
    pub tag_name: String,
    /// Whether the release is an unpublished draft.
    #[serde(default)]
    pub draft: bool,
    /// Whether the release is marked as a prerelease.
    #[serde(default)]
    pub prerelease: bool,
}

/// Client for the upstream project's release feed.
pub struct ReleaseClient {
    http: reqwest::Client,
    base_url: String,
}

impl ReleaseClient {
    /// Create a client against the real GitHub API (or the
    /// `NERO_GITHUB_API` override when set).
    pub fn new() -> Result<Self> {
        let base_url =
            std::env::var(ENV_GITHUB_API).unwrap_or_else(|_| GITHUB_API_BASE.to_string());
        Self::with_base_url(base_url)
    }

    /// Create a client against a specific API base URL.
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

    /// Fetch all published release versions, normalized and unordered.
    ///
    /// Draft releases are excluded; prereleases are kept since upstream
    /// occasionally ships release candidates users want to pin.
    pub async fn list_versions(&self) -> Result<Vec<String>> {
        let url = format!(
            "{}/repos/{}/{}/releases",
            self.base_url, REPO_OWNER, REPO_NAME
        );
        debug!("fetching release list from {url}");

        let releases: Vec<Release> = self.get_json(&url, "release list").await?;

        let versions = releases
            .into_iter()
            .filter(|r| !r.draft)
            .map(|r| VersionComparator::normalize(&r.tag_name).to_string())
            .collect();

        Ok(versions)
    }

    /// Fetch the version of the latest published release.
    pub async fn latest_version(&self) -> Result<String> {
        let url = format!(
            "{}/repos/{}/{}/releases/latest",
            self.base_url, REPO_OWNER, REPO_NAME
        );
        debug!("fetching latest release from {url}");

        let release: Release = self.get_json(&url, "latest release lookup").await?;
        Ok(VersionComparator::normalize(&release.tag_name).to_string())
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        operation: &str,
    ) -> Result<T> {
        let response = self
            .http
            .get(url)
            .header("Accept", "application/vnd.github+json")
            .send()
            .await
            .map_err(|e| NeroError::NetworkError {
                operation: operation.to_string(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NeroError::NetworkError {
                operation: operation.to_string(),
                reason: format!("GitHub API returned {status} for {url}: {body}"),
            }
            .into());
        }

        response
            .json()
            .await
            .with_context(|| format!("Failed to parse GitHub response for {operation}"))
    }
}
