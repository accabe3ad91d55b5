//! Common test utilities

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

/// Get the path to the projview binary
pub fn projview_bin() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // Remove test binary name
    path.pop(); // Remove deps
    path.push("projview");
    path
}

/// Run projview with the given arguments
pub fn run_projview(args: &[&str]) -> Output {
    Command::new(projview_bin())
        .args(args)
        .output()
        .expect("failed to execute projview")
}

/// Run projview with the given arguments, feeding `input` on stdin
pub fn run_projview_with_input(args: &[&str], input: &str) -> Output {
    let mut child = Command::new(projview_bin())
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn projview");

    // Quit may close stdin before everything is written; ignore that
    let mut stdin = child.stdin.take().unwrap();
    let _ = stdin.write_all(input.as_bytes());
    drop(stdin);

    child.wait_with_output().expect("failed to wait for projview")
}

/// Parse every table row starting with `prefix` into its numeric values
pub fn parse_rows(stdout: &str, prefix: &str) -> Vec<Vec<f64>> {
    stdout
        .lines()
        .filter(|line| line.split_whitespace().next() == Some(prefix))
        .map(|line| {
            line.split_whitespace()
                .skip(1)
                .filter_map(|s| s.parse().ok())
                .collect()
        })
        .collect()
}

/// Parse the last table row starting with `prefix`
pub fn parse_last_row(stdout: &str, prefix: &str) -> Option<Vec<f64>> {
    parse_rows(stdout, prefix).pop()
}

/// Assert two value lists match to display precision
pub fn assert_values(actual: &[f64], expected: &[f64]) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "expected {:?}, got {:?}",
        expected,
        actual
    );
    for (a, e) in actual.iter().zip(expected) {
        assert!(
            (a - e).abs() < 0.051,
            "expected {:?}, got {:?}",
            expected,
            actual
        );
    }
}
