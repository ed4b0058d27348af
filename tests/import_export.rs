use assert_cmd::Command;
use predicates::str::contains;
use std::fs;
use tempfile::tempdir;

fn phonebook(dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
    cmd.env("PHONEBOOK_STORAGE_DIR", dir).env_remove("PHONEBOOK_LOG");
    cmd
}

#[test]
fn export_import() -> Result<(), Box<dyn std::error::Error>> {
    let storage = tempdir()?;
    let files = tempdir()?;

    // Export the seed list
    let out_path = files.path().join("out.csv");
    let out_path_str = out_path.to_string_lossy().to_string();

    phonebook(storage.path())
        .args(["export", "--dest", out_path_str.as_str()])
        .assert()
        .success()
        .stdout(contains("Successfully exported 4 contact(s)"));

    let exported = fs::read_to_string(&out_path)?;
    assert!(exported.starts_with("id,name,number\nid-1,Rosie Simpson,459-12-56\n"));

    // Import rows, one of them clashing with a seed contact
    let src = files.path().join("in.csv");
    fs::write(&src, "name,number\nJane Doe,000-00-00\nANNIE COPELAND,9\n")?;

    phonebook(storage.path())
        .args(["import", "--src", src.to_str().unwrap()])
        .assert()
        .success()
        .stdout(contains("Imported 1 contact(s), skipped 1 duplicate(s)"));

    phonebook(storage.path())
        .args(["list"])
        .assert()
        .success()
        .stdout(contains("  1. Jane Doe"))
        .stdout(contains("  5. Annie Copeland"));

    // Export into a directory
    phonebook(storage.path())
        .args(["export", "--dest", files.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(contains("Successfully exported 5 contact(s)"));
    assert!(files.path().join("exported.csv").exists());

    Ok(())
}

#[test]
fn export_rejects_non_csv_destination() -> Result<(), Box<dyn std::error::Error>> {
    let storage = tempdir()?;
    let files = tempdir()?;
    let dest = files.path().join("out.txt");

    phonebook(storage.path())
        .args(["export", "--dest", dest.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(contains("Export file must be a .csv file"));

    Ok(())
}

#[test]
fn import_missing_file() -> Result<(), Box<dyn std::error::Error>> {
    let storage = tempdir()?;

    phonebook(storage.path())
        .args(["import", "--src", "./no/such/file.csv"])
        .assert()
        .failure()
        .stderr(contains("CSV file Not found"));

    Ok(())
}
