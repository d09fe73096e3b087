use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use predicates::str::contains;

fn arity_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("arity"));
    cmd.env_remove("RUST_LOG");
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().expect("run arity");
    assert!(
        output.status.success(),
        "command failed: status={} stderr={}",
        output.status,
        String::from_utf8_lossy(&output.stderr),
    );
    String::from_utf8(output.stdout).expect("utf-8 stdout")
}

#[test]
fn prints_every_label_with_closing_delimiter() {
    let stdout = stdout_of(&mut arity_cmd());
    let labels: Vec<&str> = stdout.lines().filter(|l| l.starts_with("GYB")).collect();
    assert_eq!(labels.len(), 20);
    assert_eq!(stdout.lines().filter(|l| *l == "---").count(), 20);
    assert!(stdout.starts_with("GYB1\n"));
    assert!(stdout.ends_with("}\n---\n"));
}

#[test]
fn stdout_is_identical_across_runs() {
    let first = stdout_of(&mut arity_cmd());
    let second = stdout_of(&mut arity_cmd());
    assert_eq!(first, second);
}

#[test]
fn stderr_is_quiet_by_default() {
    arity_cmd().assert().success().stderr(predicate::str::is_empty());
}

#[test]
fn debug_logging_goes_to_stderr_only() {
    let quiet = stdout_of(&mut arity_cmd());
    let mut cmd = arity_cmd();
    cmd.env("RUST_LOG", "debug");
    let output = cmd.output().expect("run arity");
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), quiet);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("rendered label"), "stderr: {stderr}");
    assert!(stderr.contains("batch complete"), "stderr: {stderr}");
}

#[test]
fn header_variant_block_present() {
    arity_cmd().assert().success().stdout(
        contains("GYB12\n/// <inheritdoc cref=\"AddFunction{TResult}(string, Func{TResult})\" />\n")
            .and(contains("/// <inheritdoc cref=\"AddFunction{T1,TResult}(string, Func{T1,TResult})\" />"))
            .and(contains("The type of the second parameter to the function.")),
    );
}

#[test]
fn version_flag() {
    arity_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unexpected_argument_rejected() {
    arity_cmd().arg("extra").assert().failure();
}
