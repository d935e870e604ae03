use predicates::prelude::*;
use tempfile::TempDir;

use crate::common::{TestEnv, mock_releases};

/// `--download-only` saves the archive into `--download-dir` and records
/// nothing, since nothing was installed.
#[test]
fn test_download_only_saves_file_without_recording() {
    let mut api = mockito::Server::new();
    let _releases = mock_releases(&mut api, &["v5.6.0"]);

    let mut assets = mockito::Server::new();
    let _asset = assets
        .mock(
            "GET",
            "/invoke-ai/InvokeAI/releases/download/v5.6.0/InvokeAI-installer-v5.6.0.zip",
        )
        .with_status(200)
        .with_header("content-type", "application/zip")
        .with_body(b"PK\x03\x04fake zip payload".as_slice())
        .create();

    let download_dir = TempDir::new().unwrap();
    let env = TestEnv::new()
        .with_api_base(api.url())
        .with_download_base(assets.url());

    env.nero()
        .args([
            "--version",
            "5.6.0",
            "--download-only",
            "--download-dir",
            download_dir.path().to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("File saved to"));

    let archive = download_dir.path().join("InvokeAI-installer-v5.6.0.zip");
    let contents = std::fs::read(&archive).unwrap();
    assert!(contents.starts_with(b"PK\x03\x04"));

    assert!(!env.record_path().exists());
}

/// A missing release asset surfaces as a download failure, exit code 5.
#[test]
fn test_missing_asset_exits_5() {
    let mut api = mockito::Server::new();
    let _releases = mock_releases(&mut api, &["v5.6.0"]);

    let mut assets = mockito::Server::new();
    let _asset = assets
        .mock(
            "GET",
            "/invoke-ai/InvokeAI/releases/download/v5.6.0/InvokeAI-installer-v5.6.0.zip",
        )
        .with_status(404)
        .create();

    let download_dir = TempDir::new().unwrap();
    let env = TestEnv::new()
        .with_api_base(api.url())
        .with_download_base(assets.url());

    env.nero()
        .args([
            "--version",
            "5.6.0",
            "--download-only",
            "--download-dir",
            download_dir.path().to_str().unwrap(),
        ])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("download"));
}

/// A v-prefixed `--version` resolves to the same asset as the bare version.
#[test]
fn test_download_only_accepts_v_prefix() {
    let mut api = mockito::Server::new();
    let _releases = mock_releases(&mut api, &["v5.6.0"]);

    let mut assets = mockito::Server::new();
    let asset = assets
        .mock(
            "GET",
            "/invoke-ai/InvokeAI/releases/download/v5.6.0/InvokeAI-installer-v5.6.0.zip",
        )
        .with_status(200)
        .with_body("payload")
        .create();

    let download_dir = TempDir::new().unwrap();
    let env = TestEnv::new()
        .with_api_base(api.url())
        .with_download_base(assets.url());

    env.nero()
        .args([
            "--version",
            "v5.6.0",
            "--download-only",
            "--download-dir",
            download_dir.path().to_str().unwrap(),
        ])
        .assert()
        .success();

    asset.assert();
}
