#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::Path;

pub fn pudding_cmd() -> Command {
    let mut cmd = Command::cargo_bin("pudding").unwrap();
    cmd.env_remove("PUDDING_CONFIG");
    cmd.env_remove("PUDDING_LOG");
    cmd
}

/// Tagged lines look like `<content> <sep> pudding|P,Q,R` with P ^ Q == R.
pub fn assert_tagged(line: &str, content: &str, sep: &str) {
    let prefix = format!("{} {} pudding|", content, sep);
    let fields = line
        .strip_prefix(&prefix)
        .unwrap_or_else(|| panic!("'{}' does not start with '{}'", line, prefix));

    let values: Vec<u32> = fields
        .split(',')
        .map(|f| {
            assert_eq!(f.len(), 8, "field '{}' is not 8 hex digits", f);
            assert!(f.chars().all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c)));
            u32::from_str_radix(f, 16).unwrap()
        })
        .collect();

    assert_eq!(values.len(), 3);
    assert_eq!(values[0] ^ values[1], values[2]);
}

pub fn read_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}
