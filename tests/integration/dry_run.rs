use predicates::prelude::*;

use crate::common::{TestEnv, mock_releases, record_with_current, record_with_history};

/// `--latest --dry-run` describes the plan and leaves no trace.
#[test]
fn test_dry_run_latest_makes_no_changes() {
    let mut server = mockito::Server::new();
    let _mock = mock_releases(&mut server, &["v5.6.0", "v5.7.0"]);

    let env = TestEnv::new().with_api_base(server.url());

    env.nero()
        .args(["--latest", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Would download version 5.7.0"))
        .stdout(predicate::str::contains("Would run the installer"))
        .stdout(predicate::str::contains("Would record version 5.7.0"));

    assert!(!env.record_path().exists());
}

/// `--rollback --dry-run` targets the previous version without the network.
#[test]
fn test_dry_run_rollback_targets_previous() {
    let env = TestEnv::new();
    env.write_record(&record_with_history("5.7.0", "5.6.0"));

    env.nero()
        .args(["--rollback", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Would download version 5.6.0"));

    let record = env.read_record();
    assert_eq!(record["current_version"], "5.7.0");
    assert_eq!(record["previous_version"], "5.6.0");
}

/// `--latest --dry-run` when already on the latest version is a plain no-op.
#[test]
fn test_dry_run_latest_when_up_to_date() {
    let mut server = mockito::Server::new();
    let _mock = mock_releases(&mut server, &["v5.7.0"]);

    let env = TestEnv::new().with_api_base(server.url());
    env.write_record(&record_with_current("5.7.0"));

    env.nero()
        .args(["--latest", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Already up to date"));
}

/// `--download-only --dry-run` plans the download but not the install.
#[test]
fn test_dry_run_download_only_skips_install_plan() {
    let mut server = mockito::Server::new();
    let _mock = mock_releases(&mut server, &["v5.6.0"]);

    let env = TestEnv::new().with_api_base(server.url());

    env.nero()
        .args(["--version", "5.6.0", "--download-only", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Would download version 5.6.0"))
        .stdout(predicate::str::contains("Would run the installer").not());
}
