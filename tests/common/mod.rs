#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A scratch working directory holding `hours.txt` with the given contents.
pub fn workdir_with_hours(contents: &str) -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    fs::write(dir.path().join("hours.txt"), contents).expect("Failed to write hours.txt");
    dir
}

pub fn pay_path(dir: &Path) -> PathBuf {
    dir.join("pay.txt")
}

pub fn read_pay(dir: &Path) -> String {
    fs::read_to_string(pay_path(dir)).expect("Failed to read pay.txt")
}

/// `rows` records, each `Emp<i> Name<i> <i> 1.00`.
pub fn generate_hours(rows: usize) -> String {
    let mut out = String::new();
    for i in 1..=rows {
        out.push_str(&format!("Emp{i} Name{i} {i} 1.00\n"));
    }
    out
}

/// Lines strictly between the two rules of a report.
pub fn record_lines(report: &str) -> Vec<&str> {
    report
        .lines()
        .skip_while(|l| !l.starts_with('='))
        .skip(1)
        .take_while(|l| !l.starts_with('='))
        .collect()
}
