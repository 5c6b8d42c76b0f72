#![allow(unused)]

use assert_cmd::{Command, cargo};
use std::{io::Write, path::PathBuf};
use tempfile::NamedTempFile;

#[cfg(windows)]
pub const BINARY_NAME: &str = "tileproj.exe";
#[cfg(not(windows))]
pub const BINARY_NAME: &str = "tileproj";

/// Helper to create a Command for the tileproj binary, unaffected by the caller's config.
pub fn tileproj_cmd() -> Command {
	let mut cmd = Command::new(cargo::cargo_bin!());
	cmd.env_remove("TILEPROJ_CONFIG").env_remove("RUST_LOG");
	cmd
}

/// Runs tileproj with `args`, asserts success and returns stdout.
pub fn tileproj_stdout(args: &[&str]) -> String {
	let output = tileproj_cmd().args(args).assert().success().get_output().stdout.clone();
	String::from_utf8(output).unwrap()
}

/// Parses a comma separated line of numbers.
pub fn parse_numbers(line: &str) -> Vec<f64> {
	line.trim().split(',').map(|v| v.parse::<f64>().unwrap()).collect()
}

/// Asserts that two lists of numbers match within `epsilon`.
pub fn assert_numbers(actual: &[f64], expected: &[f64], epsilon: f64) {
	assert_eq!(actual.len(), expected.len(), "{actual:?} vs {expected:?}");
	for (a, e) in actual.iter().zip(expected) {
		assert!((a - e).abs() <= epsilon, "{actual:?} vs {expected:?}");
	}
}

/// Writes `content` to a temporary YAML file.
pub fn temp_config(content: &str) -> NamedTempFile {
	let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
	file.write_all(content.as_bytes()).unwrap();
	file
}

pub fn path_arg(file: &NamedTempFile) -> String {
	file.path().to_string_lossy().to_string()
}
