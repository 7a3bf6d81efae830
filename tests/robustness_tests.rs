use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;

mod common;

#[test]
fn test_non_numeric_hours() {
    let dir = common::workdir_with_hours("John Smith 40 15.50\nJane Doe forty 20.00\n");

    let mut cmd = Command::new(cargo_bin!("payreport"));
    cmd.current_dir(dir.path());

    cmd.assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("forty"))
        .stdout(predicate::str::contains("successfully created").not());

    assert!(!common::pay_path(dir.path()).exists());
}

#[test]
fn test_digit_separator_is_not_a_number() {
    let dir = common::workdir_with_hours("A B 1_0 2\n");

    Command::new(cargo_bin!("payreport"))
        .current_dir(dir.path())
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("1_0"));

    assert!(!common::pay_path(dir.path()).exists());
}

#[test]
fn test_out_of_range_number() {
    let dir = common::workdir_with_hours("A B 1e30 1\n");

    Command::new(cargo_bin!("payreport"))
        .current_dir(dir.path())
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("number_out_of_range"));

    assert!(!common::pay_path(dir.path()).exists());
}

#[test]
fn test_trailing_partial_record() {
    let dir = common::workdir_with_hours("John Smith 40 15.50\nJane Doe 35\n");

    let mut cmd = Command::new(cargo_bin!("payreport"));
    cmd.current_dir(dir.path());

    cmd.assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("incomplete_record"));

    assert!(!common::pay_path(dir.path()).exists());
}

#[test]
fn test_malformed_input_keeps_previous_report() {
    let dir = common::workdir_with_hours("John Smith 40 $15.50\n");
    fs::write(common::pay_path(dir.path()), "last week\n").unwrap();

    Command::new(cargo_bin!("payreport"))
        .current_dir(dir.path())
        .assert()
        .failure()
        .code(1);

    assert_eq!(common::read_pay(dir.path()), "last week\n");
}

#[test]
fn test_unwritable_output() {
    let dir = common::workdir_with_hours("John Smith 40 15.50\n");
    // A directory in place of pay.txt cannot be opened for writing.
    fs::create_dir(common::pay_path(dir.path())).unwrap();

    Command::new(cargo_bin!("payreport"))
        .current_dir(dir.path())
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains(
            "The file was not successfully opened",
        ));
}

#[test]
fn test_logs_stay_off_stdout() {
    let dir = common::workdir_with_hours("John Smith 40 15.50\n");

    Command::new(cargo_bin!("payreport"))
        .current_dir(dir.path())
        .env("RUST_LOG", "payreport=debug")
        .assert()
        .success()
        .stdout("The report has been successfully created!\n\n")
        .stderr(predicate::str::contains("Parsed pay record"));
}
