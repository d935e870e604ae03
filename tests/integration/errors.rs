use predicates::prelude::*;

use crate::common::{TestEnv, mock_releases, record_with_current};

/// Requesting a version that does not exist fails with exit code 2 and
/// leaves the record alone.
#[test]
fn test_unknown_version_exits_2() {
    let mut server = mockito::Server::new();
    let _mock = mock_releases(&mut server, &["v5.6.0", "v5.7.0"]);

    let env = TestEnv::new().with_api_base(server.url());
    env.write_record(&record_with_current("5.6.0"));

    env.nero()
        .args(["--version", "9.9.9"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("9.9.9"));

    let record = env.read_record();
    assert_eq!(record["current_version"], "5.6.0");
}

/// Rollback with no history fails with exit code 3.
#[test]
fn test_rollback_without_history_exits_3() {
    let env = TestEnv::new();
    env.write_record(&record_with_current("5.6.0"));

    env.nero()
        .arg("--rollback")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("No previous version"));
}

/// Rollback on a fresh machine behaves the same as rollback without history.
#[test]
fn test_rollback_with_no_record_exits_3() {
    let env = TestEnv::new();

    env.nero()
        .arg("--rollback")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("No previous version"));
}

/// An empty release list fails with exit code 4.
#[test]
fn test_empty_release_list_exits_4() {
    let mut server = mockito::Server::new();
    let _mock = mock_releases(&mut server, &[]);

    let env = TestEnv::new().with_api_base(server.url());

    env.nero()
        .arg("--latest")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("No releases"));
}

/// A corrupt record file fails with exit code 7 before any network call.
#[test]
fn test_corrupt_record_exits_7() {
    let env = TestEnv::new();
    env.write_record("{not valid json");

    env.nero().arg("--check").assert().code(7);
}
