//! Binary-level tests for `generate_entries`.

// Allow deprecated - cargo_bin is standard for CLI testing
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

fn generate_cmd() -> Command {
    Command::cargo_bin("generate_entries").expect("Failed to find generate_entries binary")
}

fn stdout_of(args: &[&str]) -> String {
    let output = generate_cmd().args(args).output().expect("failed to run");
    assert!(output.status.success());
    String::from_utf8(output.stdout).expect("non utf-8 output")
}

#[test]
fn test_sequential_scenario() {
    generate_cmd()
        .args(["3", "2"])
        .assert()
        .success()
        .stdout("put a 0\nput b 1\nput c 2\nget a\nget b\nget c\n");
}

#[test]
fn test_defaults() {
    let out = stdout_of(&[]);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 20);
    assert_eq!(lines[9], "put j 9");
    assert_eq!(lines[10], "get a");
}

#[test]
fn test_zero_count_is_silent() {
    for args in [&["0", "5"][..], &["0", "5", "--random"][..]] {
        generate_cmd().args(args).assert().success().stdout("");
    }
}

#[test]
fn test_random_flag_anywhere() {
    let out = stdout_of(&["--random", "40", "3"]);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 80);
    for (i, line) in lines[..40].iter().enumerate() {
        let fields: Vec<&str> = line.split(' ').collect();
        assert_eq!(fields.len(), 3);
        assert_eq!(fields[0], "put");
        assert!((1..=3).contains(&fields[1].len()));
        assert!(fields[1].bytes().all(|b| b.is_ascii_lowercase()));
        assert_eq!(fields[2], i.to_string());
        assert_eq!(lines[40 + i], format!("get {}", fields[1]));
    }
}

#[test]
fn test_seed_repeats() {
    let args = ["25", "8", "--random", "--seed", "99"];
    assert_eq!(stdout_of(&args), stdout_of(&args));
}

#[test]
fn test_put_only_prefix() {
    let out = stdout_of(&["4", "2", "--random", "--put-only", "--prefix", "+", "--seed", "1"]);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines.iter().all(|l| l.starts_with("+put ")));
}

#[test]
fn test_help_goes_to_stderr() {
    for flag in ["-h", "--help"] {
        generate_cmd()
            .arg(flag)
            .assert()
            .success()
            .stdout("")
            .stderr(predicate::str::contains("usage:"));
    }
}

#[test]
fn test_help_beats_bad_arguments() {
    for args in [&["ten", "-h"][..], &["5", "3", "extra", "--help"][..]] {
        generate_cmd()
            .args(args)
            .assert()
            .success()
            .stdout("")
            .stderr(predicate::str::starts_with("usage:"));
    }
}

#[test]
fn test_malformed_count() {
    generate_cmd()
        .arg("ten")
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_random_zero_length_rejected() {
    generate_cmd()
        .args(["5", "0", "--random"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("max length"));
}

#[test]
fn test_exhausted_key_space() {
    let out = stdout_of(&["1000", "1"]);
    assert_eq!(out.lines().count(), 52);
}
