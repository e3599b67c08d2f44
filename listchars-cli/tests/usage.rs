//! The binary must reject anything other than exactly one font argument
//! with a usage line on stdout and exit status 1, touching no files.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_listchars"))
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Couldn't run listchars")
}

/// A fresh scratch directory so file-creation checks see only this run
fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("listchars-usage-{}-{}", name, std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).expect("Couldn't create scratch dir");
    dir
}

fn assert_usage_error(dir: &Path, output: &Output) {
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Usage: listchars"));
    assert!(!dir.join("supported_chars.txt").exists());
}

#[test]
fn zero_font_arguments_is_a_usage_error() {
    let dir = scratch_dir("zero");
    let output = run_in(&dir, &[]);
    assert_usage_error(&dir, &output);
}

#[test]
fn two_font_arguments_is_a_usage_error() {
    let dir = scratch_dir("two");
    let output = run_in(&dir, &["a.ttf", "b.ttf"]);
    assert_usage_error(&dir, &output);
}

#[test]
fn help_states_the_single_font_contract() {
    let dir = scratch_dir("help");
    let output = run_in(&dir, &["--help"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("exactly one"));
}
