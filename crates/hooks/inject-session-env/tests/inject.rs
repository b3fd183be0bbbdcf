//! End-to-end tests for the inject-session-env hook binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn hook() -> Command {
    Command::cargo_bin("inject-session-env").unwrap()
}

#[test]
fn bash_invocation_is_rewritten() {
    hook()
        .write_stdin(r#"{"tool": "bash", "args": {"command": "git status"}, "sessionId": "ses-1", "cwd": "/work"}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("# --- session env start ---"))
        .stdout(predicate::str::contains("export AGENT_SESSION_ID='ses-1'"))
        .stdout(predicate::str::contains("git status"));
}

#[test]
fn non_bash_invocation_is_echoed_unchanged() {
    let output = hook()
        .write_stdin(r#"{"tool": "read", "args": {"filePath": "a.txt"}, "sessionId": "ses-1"}"#)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let echoed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(echoed["tool"], "read");
    assert_eq!(echoed["args"]["filePath"], "a.txt");
    assert_eq!(echoed["sessionId"], "ses-1");
}

#[test]
fn annotated_command_is_not_rewritten_again() {
    let first = hook()
        .write_stdin(r#"{"tool": "bash", "args": {"command": "ls -la"}, "sessionId": "ses-1"}"#)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let second = hook()
        .write_stdin(first.clone())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let first: serde_json::Value = serde_json::from_slice(&first).unwrap();
    let second: serde_json::Value = serde_json::from_slice(&second).unwrap();
    assert_eq!(first["args"]["command"], second["args"]["command"]);
}

#[test]
fn malformed_input_fails() {
    hook().write_stdin("not json").assert().failure();
}
