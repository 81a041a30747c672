use assert_cmd::Command;
use predicates::prelude::*;

fn todo() -> Command {
    Command::cargo_bin("todo").unwrap()
}

#[test]
fn test_help_lists_arguments() {
    todo()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("FILE"))
        .stdout(predicate::str::contains("--key"));
}

#[test]
fn test_version() {
    todo()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("todo "));
}

#[test]
fn test_rejects_unknown_flag() {
    todo()
        .arg("--frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--frobnicate"));
}
