use assert_cmd::Command;
use predicates::str::contains;

const BINARY_NAME: &str = "pitwall";

#[test]
/// Help command should display usage information.
fn cli_help_displays_usage() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(contains("Command-line arguments"));
}

#[test]
/// The start subcommand should document its mode flags.
fn cli_start_help_lists_flags() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["start", "--help"]);
    cmd.assert()
        .success()
        .stdout(contains("--headless"))
        .stdout(contains("--no-background"));
}

#[test]
/// An unknown subcommand should fail with a usage hint.
fn cli_rejects_unknown_subcommand() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("podium");
    cmd.assert().failure();
}
