use assert_cmd::Command;
use predicates::prelude::*;

// None of these invoke tmux; they only exercise the argument surface.

fn jarmux() -> Command {
    Command::cargo_bin("jarmux").unwrap()
}

#[test]
fn long_help_prints_usage_and_exits_zero() {
    jarmux()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("--wait-time"));
}

#[test]
fn help_flag_wins_anywhere_in_argv() {
    jarmux()
        .args(["survival", "/srv/minecraft", "-h"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn no_arguments_fails_with_usage() {
    jarmux()
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn single_positional_fails_with_usage() {
    jarmux()
        .arg("survival")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}
