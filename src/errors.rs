use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Carries the name of the contact already in the list, in its stored casing.
    #[error("{0} is already in contacts.")]
    DuplicateName(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("{0} Not found")]
    NotFound(String),

    #[error("Could not read snapshot: {0}")]
    PersistenceRead(String),

    #[error("Could not write snapshot: {0}")]
    PersistenceWrite(String),

    #[error("I/O error while accessing a file or resource: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid CSV data: {0}")]
    Csv(#[from] csv::Error),
}

impl AppError {
    /// Errors the view is expected to show to the user.
    pub fn is_user_facing(&self) -> bool {
        matches!(self, AppError::DuplicateName(_) | AppError::Validation(_))
    }
}
