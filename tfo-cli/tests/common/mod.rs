#![allow(dead_code)]

use assert_cmd::Command;

/// Runs the `tfo` binary quietly with the given arguments.
pub fn tfo_command(args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("tfo").unwrap();
    cmd.arg("-q").args(args);
    cmd
}

/// Runs `tfo` and returns stdout, asserting success.
pub fn run_tfo(args: &[&str]) -> String {
    let output = tfo_command(args).assert().success().get_output().stdout.clone();
    String::from_utf8(output).unwrap()
}

pub fn fixture(name: &str) -> String {
    format!("{}/tests/data/{}", env!("CARGO_MANIFEST_DIR"), name)
}
