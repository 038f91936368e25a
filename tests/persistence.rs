use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn contacts_survive_across_sessions() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("contacts.txt");

    // Session one adds and exits
    Command::cargo_bin("contact-book")
        .unwrap()
        .env("CONTACTS_PATH", &file)
        .write_stdin("2\nUche\n01234567890\n5\n")
        .assert()
        .success();

    // Session two sees the same book
    Command::cargo_bin("contact-book")
        .unwrap()
        .env("CONTACTS_PATH", &file)
        .write_stdin("1\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Uche | 01234567890"));
}

#[test]
fn malformed_lines_are_skipped_with_a_warning() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("contacts.txt");
    fs::write(
        &file,
        "Uche | 01234567890\nthis line has no delimiter\nMom | 98765432109\n",
    )
    .unwrap();

    Command::cargo_bin("contact-book")
        .unwrap()
        .env("CONTACTS_PATH", &file)
        .write_stdin("1\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Uche | 01234567890"))
        .stdout(predicate::str::contains("Mom | 98765432109"))
        .stderr(predicate::str::contains(
            "Skipping malformed contact line: 'this line has no delimiter'",
        ));

    // Exit rewrote the file without the unparseable line
    let contents = fs::read_to_string(&file).unwrap();
    assert_eq!(contents, "Uche | 01234567890\nMom | 98765432109\n");
}

#[test]
fn surrounding_whitespace_is_trimmed_on_load() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("contacts.txt");
    fs::write(&file, "   Uche   |   01234567890   \n").unwrap();

    Command::cargo_bin("contact-book")
        .unwrap()
        .env("CONTACTS_PATH", &file)
        .write_stdin("1\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Uche | 01234567890"));
}

#[test]
fn the_file_flag_overrides_the_environment() {
    let dir = tempdir().unwrap();
    let env_file = dir.path().join("env-contacts.txt");
    let flag_file = dir.path().join("flag-contacts.txt");
    fs::write(&flag_file, "Flagged | 555\n").unwrap();

    Command::cargo_bin("contact-book")
        .unwrap()
        .env("CONTACTS_PATH", &env_file)
        .arg("--file")
        .arg(&flag_file)
        .write_stdin("1\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Flagged | 555"));
}
