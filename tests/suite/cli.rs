//! End-to-end tests of the `fstrips` binary

use std::path::Path;
use std::process::{Command, Output};

use fstrips_config::CONFIG_ENV;

/// Runs the binary with the default config location pointed at a file under
/// `dir` that does not exist.
fn run(dir: &Path, config: Option<&Path>, args: &[&str]) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_fstrips"));
    if let Some(config) = config {
        command.arg("--config").arg(config);
    }
    command
        .args(args)
        .env(CONFIG_ENV, dir.join("absent.toml"))
        .env("RUST_LOG", "off")
        .output()
        .unwrap()
}

#[test]
fn demo_prints_model() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(dir.path(), None, &["demo"]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines[0],
        "language: Unnamed FOL Language: 3 sorts, 2 functions, 3 predicates"
    );
    assert!(lines.contains(&r#"  =(object,object) {"symbol":"=","type":["object","object"]}"#));
    assert!(lines.contains(&"  (T -> total-cost() += 1)"));
    assert_eq!(lines.last(), Some(&"metric: (minimize total-cost())"));
}

#[test]
fn demo_uses_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[language]\nname = \"blocks\"\n").unwrap();

    let output = run(dir.path(), Some(&path), &["demo"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("language: blocks: "));
}

#[test]
fn read_and_write_fail_with_not_implemented() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("domain.pddl");

    for command in ["read", "write"] {
        let output = run(dir.path(), None, &[command, target.to_str().unwrap()]);
        assert!(!output.status.success());
        let stderr = String::from_utf8(output.stderr).unwrap();
        assert!(stderr.contains("is not implemented"), "{command}: {stderr}");
    }
    assert!(!target.exists());
}

#[test]
fn invalid_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[language]\ntheories = [\"geometry\"]\n").unwrap();

    let output = run(dir.path(), Some(&path), &["demo"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("failed to load configuration"));
}

#[test]
fn missing_explicit_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("typo.toml");

    let output = run(dir.path(), Some(&path), &["demo"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("typo.toml does not exist"), "{stderr}");
}
