use super::*;

use std::io::ErrorKind;
use std::path::PathBuf;

pub const DEFAULT_STORAGE_DIR: &str = "./.instance";

/// Stores each key as `<dir>/<KEY>.json`.
pub struct JsonFileAdapter {
    pub medium: String,
    pub dir: PathBuf,
}

impl JsonFileAdapter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            medium: "json".to_string(),
            dir: dir.into(),
        }
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl PersistenceAdapter for JsonFileAdapter {
    fn read(&self, key: &str) -> Result<Option<String>, AppError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::PersistenceRead(e.to_string())),
        }
    }

    fn write(&self, key: &str, text: &str) -> Result<(), AppError> {
        let path = self.path_for(key);

        create_file_parent(&path).map_err(|e| AppError::PersistenceWrite(e.to_string()))?;
        fs::write(&path, text).map_err(|e| AppError::PersistenceWrite(e.to_string()))?;

        Ok(())
    }

    fn medium(&self) -> &str {
        &self.medium
    }
}
