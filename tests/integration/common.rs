//! Common test utilities for nero integration tests
//!
//! Every test gets its own temporary config directory, and the GitHub API
//! and download hosts are redirected to mock servers via environment
//! variables, so tests never touch the network or the user's real record.

// Not every helper is used by every test file
#![allow(dead_code)]

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// Isolated environment for a single test: a throwaway config directory
/// plus optional mock endpoints.
pub struct TestEnv {
    config_dir: TempDir,
    api_base: Option<String>,
    download_base: Option<String>,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            config_dir: TempDir::new().expect("failed to create temp config dir"),
            api_base: None,
            download_base: None,
        }
    }

    /// Redirect GitHub API calls to a mock server.
    pub fn with_api_base(mut self, url: impl Into<String>) -> Self {
        self.api_base = Some(url.into());
        self
    }

    /// Redirect asset downloads to a mock server.
    pub fn with_download_base(mut self, url: impl Into<String>) -> Self {
        self.download_base = Some(url.into());
        self
    }

    /// Path where the binary will read and write its install record.
    pub fn record_path(&self) -> PathBuf {
        self.config_dir.path().join("nero.json")
    }

    /// Seed the record file with raw JSON.
    pub fn write_record(&self, json: &str) {
        std::fs::write(self.record_path(), json).expect("failed to seed record file");
    }

    /// Parse the record file back for assertions.
    pub fn read_record(&self) -> serde_json::Value {
        let raw = std::fs::read_to_string(self.record_path()).expect("record file missing");
        serde_json::from_str(&raw).expect("record file is not valid JSON")
    }

    /// Build a `nero` command wired to this environment.
    pub fn nero(&self) -> Command {
        let mut cmd = Command::cargo_bin("nero").expect("nero binary not built");
        cmd.env("NERO_CONFIG_DIR", self.config_dir.path());
        cmd.env("NO_COLOR", "1");
        cmd.env_remove("RUST_LOG");
        if let Some(api) = &self.api_base {
            cmd.env("NERO_GITHUB_API", api);
        }
        if let Some(download) = &self.download_base {
            cmd.env("NERO_DOWNLOAD_BASE", download);
        }
        cmd
    }
}

/// Seed JSON for a record with both a current and a previous version.
pub fn record_with_history(current: &str, previous: &str) -> String {
    format!(
        r#"{{"current_version": "{current}", "previous_version": "{previous}", "last_update": null}}"#
    )
}

/// Seed JSON for a record with only a current version.
pub fn record_with_current(current: &str) -> String {
    format!(r#"{{"current_version": "{current}", "previous_version": null, "last_update": null}}"#)
}

/// GitHub-style release list body for the given tags.
pub fn releases_body(tags: &[&str]) -> String {
    let items: Vec<String> = tags
        .iter()
        .map(|tag| format!(r#"{{"tag_name": "{tag}", "draft": false, "prerelease": false}}"#))
        .collect();
    format!("[{}]", items.join(","))
}

/// Mock the release list endpoint on `server` with the given tags.
pub fn mock_releases(server: &mut mockito::Server, tags: &[&str]) -> mockito::Mock {
    server
        .mock("GET", "/repos/invoke-ai/InvokeAI/releases")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(releases_body(tags))
        .create()
}

/// Mock the latest-release endpoint on `server`.
pub fn mock_latest(server: &mut mockito::Server, tag: &str) -> mockito::Mock {
    server
        .mock("GET", "/repos/invoke-ai/InvokeAI/releases/latest")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(format!(
            r#"{{"tag_name": "{tag}", "draft": false, "prerelease": false}}"#
        ))
        .create()
}
