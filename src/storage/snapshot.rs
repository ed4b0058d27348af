//! JSON form of the contact list: an array of `{"id", "name", "number"}` objects
//! in list order.

use super::*;
use crate::domain::state::check_contacts;

pub fn serialize(contacts: &[Contact]) -> Result<String, AppError> {
    Ok(serde_json::to_string(contacts)?)
}

/// Parses a snapshot and rejects lists with missing ids, repeated ids, blank
/// names or names that collide ignoring case.
pub fn deserialize(text: &str) -> Result<Vec<Contact>, AppError> {
    let contacts: Vec<Contact> = serde_json::from_str(text)
        .map_err(|e| AppError::PersistenceRead(format!("malformed snapshot: {e}")))?;

    check_contacts(&contacts)
        .map_err(|e| AppError::PersistenceRead(format!("inconsistent snapshot: {e}")))?;

    Ok(contacts)
}
