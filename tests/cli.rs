//! End-to-end tests for the datareport binary

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A fake home directory with a Desktop folder the report lands in
fn fake_home() -> (TempDir, PathBuf) {
    let home = TempDir::new().unwrap();
    let desktop = home.path().join("Desktop");
    fs::create_dir(&desktop).unwrap();
    (home, desktop)
}

fn datareport(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("datareport").unwrap();
    cmd.env("HOME", home.path())
        .env_remove("XDG_CONFIG_HOME")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn generates_report_on_desktop() {
    let (home, desktop) = fake_home();
    let input = home.path().join("sales.csv");
    fs::write(&input, "a,b,c\n1,2,x\n3,,y\n5,6,\n").unwrap();

    datareport(&home)
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Report successfully generated at:"));

    let report = desktop.join("sales_analysis_report.pdf");
    let bytes = fs::read(&report).unwrap();
    assert!(bytes.starts_with(b"%PDF-"));

    // Uncompressed content streams keep the rendered lines visible.
    let text = String::from_utf8_lossy(&bytes);
    assert!(text.contains("Data Analysis Report"));
    assert!(text.contains("Total Entries: 3"));
    assert!(text.contains("Mean of Numeric Columns: {a: 3.0, b: 4.0}"));
    assert!(text.contains("Missing Values: {a: 0, b: 1, c: 1}"));
    assert!(text.contains("Page 1"));
}

#[test]
fn prompts_for_path_when_no_argument() {
    let (home, desktop) = fake_home();
    let input = home.path().join("data.csv");
    fs::write(&input, "x,y\n1,2\n").unwrap();

    // Pasted path with whitespace and quotes around it
    datareport(&home)
        .write_stdin(format!("  \"{}\"  \n", input.display()))
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter the path to your CSV file:"))
        .stdout(predicate::str::contains("Report successfully generated at:"));

    assert!(desktop.join("data_analysis_report.pdf").exists());
}

#[test]
fn header_only_file_reports_zero_entries() {
    let (home, desktop) = fake_home();
    let input = home.path().join("empty.csv");
    fs::write(&input, "a,b\n").unwrap();

    datareport(&home).arg(&input).assert().success();

    let bytes = fs::read(desktop.join("empty_analysis_report.pdf")).unwrap();
    let text = String::from_utf8_lossy(&bytes);
    assert!(text.contains("Total Entries: 0"));
    assert!(text.contains("Mean of Numeric Columns: {}"));
}

#[test]
fn missing_input_file_fails_without_output() {
    let (home, desktop) = fake_home();

    datareport(&home)
        .arg(home.path().join("no_such.csv"))
        .assert()
        .failure()
        .stdout(predicate::str::contains("File not found"));

    assert_eq!(fs::read_dir(&desktop).unwrap().count(), 0);
}

#[test]
fn unparsable_file_fails_without_output() {
    let (home, desktop) = fake_home();
    let input = home.path().join("ragged.csv");
    fs::write(&input, "a,b\n1,2\n3,4,5\n").unwrap();

    datareport(&home)
        .arg(&input)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Error reading file"));

    assert_eq!(fs::read_dir(&desktop).unwrap().count(), 0);
}

#[test]
fn missing_desktop_dir_fails_cleanly() {
    // No Desktop folder under this home
    let home = TempDir::new().unwrap();
    let input = home.path().join("data.csv");
    fs::write(&input, "a\n1\n").unwrap();

    datareport(&home)
        .arg(&input)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Error writing report to"));
}
