use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn phonebook(dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("phonebook").unwrap();
    cmd.env("PHONEBOOK_STORAGE_DIR", dir).env_remove("PHONEBOOK_LOG");
    cmd
}

#[test]
fn add_contact() {
    let dir = tempdir().unwrap();

    phonebook(dir.path())
        .args(["add", "--name", "Jane Doe", "--number", "000-00-00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact added successfully"));

    // Newest contact is listed first, ahead of the seed contacts
    phonebook(dir.path())
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("  1. Jane Doe             000-00-00"))
        .stdout(predicate::str::contains("  5. Annie Copeland"));

    assert!(dir.path().join("CONTACTS.json").exists());
}

#[test]
fn duplicate_name_is_reported() {
    let dir = tempdir().unwrap();

    phonebook(dir.path())
        .args(["add", "--name", "rosie simpson", "--number", "1"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "Rosie Simpson is already in contacts.",
        ));

    // Nothing was saved
    assert!(!dir.path().join("CONTACTS.json").exists());
}

#[test]
fn invalid_inputs() {
    let dir = tempdir().unwrap();

    // INVALID COMMAND
    phonebook(dir.path())
        .args(["and", "--name", "Alice", "--number", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));

    // MISSING NUMBER
    phonebook(dir.path())
        .args(["add", "--name", "Alice"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--number"));

    // EMPTY NAME
    phonebook(dir.path())
        .args(["add", "--name", " ", "--number", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation failed"));
}
