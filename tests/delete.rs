use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn phonebook(dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("phonebook").unwrap();
    cmd.env("PHONEBOOK_STORAGE_DIR", dir).env_remove("PHONEBOOK_LOG");
    cmd
}

#[test]
fn deleting_contacts() {
    let dir = tempdir().unwrap();

    // Attempt to delete non existing contact
    phonebook(dir.path())
        .args(["delete", "--id", "no-such-id"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No contact with this id"));

    // Seed contacts carry fixed ids
    phonebook(dir.path())
        .args(["delete", "--id", "id-2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact deleted successfully"));

    phonebook(dir.path())
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hermione Kline").not())
        .stdout(predicate::str::contains("  2. Eden Clements"));

    let saved = fs::read_to_string(dir.path().join("CONTACTS.json")).unwrap();
    assert!(!saved.contains("Hermione Kline"));
    assert!(saved.starts_with(r#"[{"id":"id-1","name":"Rosie Simpson","number":"459-12-56"}"#));
}

#[test]
fn deleting_every_contact_leaves_an_empty_list() {
    let dir = tempdir().unwrap();

    for id in ["id-1", "id-2", "id-3", "id-4"] {
        phonebook(dir.path())
            .args(["delete", "--id", id])
            .assert()
            .success();
    }

    // An empty saved list is kept, not replaced by the seed contacts
    phonebook(dir.path())
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No contact yet"));

    let saved = fs::read_to_string(dir.path().join("CONTACTS.json")).unwrap();
    assert_eq!(saved, "[]");
}
