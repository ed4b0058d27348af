use std::path::PathBuf;

use super::*;
use crate::prelude::{ContactStore, NewContact};
use csv::Reader;
use tracing::warn;

const IMPORT_PATH: &str = "./import_export/contacts.csv";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportReport {
    pub path: PathBuf,
    pub added: u64,
    pub skipped: u64,
}

/// Adds every `name,number` row of the CSV file through the store, so rows are
/// deduplicated exactly like contacts typed by hand. Rejected rows are skipped.
///
/// The whole file is parsed first; a malformed row aborts the import before
/// any contact is added.
pub fn import_contacts_from_csv(
    store: &mut ContactStore,
    src: Option<&str>,
) -> Result<ImportReport, AppError> {
    let file_path = PathBuf::from(src.unwrap_or(IMPORT_PATH));

    if !file_path.exists() {
        return Err(AppError::NotFound("CSV file".to_string()));
    }

    if file_path.extension().is_none_or(|ext| ext != "csv") {
        return Err(AppError::Validation("File not .csv".to_string()));
    }

    let mut reader = Reader::from_path(&file_path)?;
    let records = reader
        .deserialize()
        .collect::<Result<Vec<NewContact>, csv::Error>>()?;

    let mut added: u64 = 0;
    let mut skipped: u64 = 0;

    for record in records {
        match store.add_contact(record) {
            Ok(_) => added += 1,
            Err(e) if e.is_user_facing() => {
                warn!(target: "phonebook::import", error = %e, "Skipped CSV row");
                skipped += 1;
            }
            Err(e) => return Err(e),
        }
    }

    Ok(ImportReport {
        path: file_path,
        added,
        skipped,
    })
}
