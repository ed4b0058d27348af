pub mod memory;
pub mod snapshot;
pub mod storage_port;
pub mod stores;

use crate::prelude::{AppError, Contact};
use std::fs;
use std::path::Path;

pub use memory::MemoryAdapter;
pub use stores::JsonFileAdapter;

/// Key the contact list snapshot is stored under.
pub const CONTACTS_STORAGE_KEY: &str = "CONTACTS";

/// Key-value text storage the phonebook reads at startup and writes after each change.
pub trait PersistenceAdapter {
    /// Returns `Ok(None)` when nothing is stored under `key`.
    fn read(&self, key: &str) -> Result<Option<String>, AppError>;

    fn write(&self, key: &str, text: &str) -> Result<(), AppError>;

    fn medium(&self) -> &str;
}

pub fn create_file_parent(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
