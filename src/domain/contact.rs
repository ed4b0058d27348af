use super::*;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub number: String,
}

/// A contact as typed by the user, before the store assigns it an id.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewContact {
    pub name: String,
    pub number: String,
}

impl Contact {
    pub fn new(id: String, name: String, number: String) -> Self {
        Contact { id, name, number }
    }

    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    pub fn name_contains(&self, needle_lower: &str) -> bool {
        self.name.to_lowercase().contains(needle_lower)
    }
}

impl NewContact {
    pub fn new(name: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            number: number.into(),
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::Validation("Name must not be empty".to_string()));
        }
        Ok(())
    }

    pub fn into_contact(self, id: String) -> Contact {
        Contact::new(id, self.name, self.number)
    }
}

/// Demo contacts used when storage holds no usable snapshot.
pub fn seed_contacts() -> Vec<Contact> {
    [
        ("id-1", "Rosie Simpson", "459-12-56"),
        ("id-2", "Hermione Kline", "443-89-12"),
        ("id-3", "Eden Clements", "645-17-79"),
        ("id-4", "Annie Copeland", "227-91-26"),
    ]
    .into_iter()
    .map(|(id, name, number)| Contact::new(id.to_string(), name.to_string(), number.to_string()))
    .collect()
}
