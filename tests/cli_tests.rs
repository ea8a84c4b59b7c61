//! CLI integration tests

use assert_cmd::Command;
use predicates::prelude::*;

fn clip_relay_bin() -> Command {
    Command::cargo_bin("clip-relay").unwrap()
}

#[test]
fn help_output() {
    clip_relay_bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("clipboard"))
        .stdout(predicate::str::contains("PORT_OR_COMMAND"))
        .stdout(predicate::str::contains("--poll-interval"))
        .stdout(predicate::str::contains("--image-tool"));
}

#[test]
fn version_output() {
    clip_relay_bin()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("clip-relay"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn invalid_target_is_usage_error() {
    clip_relay_bin()
        .arg("not-a-port")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid port"));
}

#[test]
fn zero_port_is_usage_error() {
    clip_relay_bin()
        .arg("0")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid port"));
}

#[test]
fn lowercase_command_is_rejected() {
    // Command tokens are exact; "read_text" is neither a command nor a port.
    clip_relay_bin()
        .arg("read_text")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("READ_TEXT"));
}
