use predicates::prelude::*;

use crate::common::{TestEnv, mock_releases, record_with_current, record_with_history};

/// `--check` reports the record and the latest release, and flags an update.
#[test]
fn test_check_reports_update_available() {
    let mut server = mockito::Server::new();
    let _mock = mock_releases(&mut server, &["v5.7.0", "v5.6.0"]);

    let env = TestEnv::new().with_api_base(server.url());
    env.write_record(&record_with_history("5.6.0", "5.5.2"));

    env.nero()
        .arg("--check")
        .assert()
        .success()
        .stdout(predicate::str::contains("current version"))
        .stdout(predicate::str::contains("5.6.0"))
        .stdout(predicate::str::contains("5.5.2"))
        .stdout(predicate::str::contains("Update available: 5.6.0 -> 5.7.0"));
}

/// `--check` with the latest version installed says so.
#[test]
fn test_check_up_to_date() {
    let mut server = mockito::Server::new();
    let _mock = mock_releases(&mut server, &["v5.7.0", "v5.6.0"]);

    let env = TestEnv::new().with_api_base(server.url());
    env.write_record(&record_with_current("5.7.0"));

    env.nero()
        .arg("--check")
        .assert()
        .success()
        .stdout(predicate::str::contains("latest version installed"));
}

/// `--check` never mutates the record.
#[test]
fn test_check_does_not_touch_record() {
    let mut server = mockito::Server::new();
    let _mock = mock_releases(&mut server, &["v5.7.0"]);

    let env = TestEnv::new().with_api_base(server.url());
    let seeded = record_with_history("5.6.0", "5.5.2");
    env.write_record(&seeded);

    env.nero().arg("--check").assert().success();

    let record = env.read_record();
    assert_eq!(record["current_version"], "5.6.0");
    assert_eq!(record["previous_version"], "5.5.2");
}

/// `--check` on a fresh machine reports an empty record without failing.
#[test]
fn test_check_with_no_record() {
    let mut server = mockito::Server::new();
    let _mock = mock_releases(&mut server, &["v5.7.0"]);

    let env = TestEnv::new().with_api_base(server.url());

    env.nero()
        .arg("--check")
        .assert()
        .success()
        .stdout(predicate::str::contains("none"))
        .stdout(predicate::str::contains("5.7.0"));
}
