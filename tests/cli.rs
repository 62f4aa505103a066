//! Binary smoke tests.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn valise_prints_help() {
    Command::cargo_bin("valise")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("travel concierge"));
}

#[test]
fn valise_api_prints_help() {
    Command::cargo_bin("valise-api")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("mock travel-booking service"));
}

#[test]
fn unknown_flags_are_rejected() {
    Command::cargo_bin("valise-api")
        .unwrap()
        .arg("--definitely-not-a-flag")
        .assert()
        .failure();
}
