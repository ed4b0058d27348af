use super::*;

use std::collections::HashSet;

/// Immutable view of the phonebook at one point in time.
///
/// Every transition returns a new value; the previous one is left as it was.
/// `contacts` is kept most-recent-first and never holds two contacts whose
/// names differ only by case. `filter_text` only affects [`visible_contacts`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactListState {
    contacts: Vec<Contact>,
    filter_text: String,
}

impl ContactListState {
    /// Builds a state after checking ids and names with [`check_contacts`].
    pub fn new(contacts: Vec<Contact>) -> Result<Self, AppError> {
        check_contacts(&contacts)?;
        Ok(Self {
            contacts,
            filter_text: String::new(),
        })
    }

    /// Wraps contacts that already passed [`check_contacts`].
    pub(crate) fn from_checked(contacts: Vec<Contact>) -> Self {
        Self {
            contacts,
            filter_text: String::new(),
        }
    }

    pub fn seeded() -> Self {
        Self {
            contacts: seed_contacts(),
            filter_text: String::new(),
        }
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn filter_text(&self) -> &str {
        &self.filter_text
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.has_name(name))
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.id == id)
    }

    /// Prepends `contact`. Fails with [`AppError::DuplicateName`] when a contact
    /// with the same name (ignoring case) is already listed.
    pub fn with_contact(&self, contact: Contact) -> Result<Self, AppError> {
        if let Some(existing) = self.find_by_name(&contact.name) {
            return Err(AppError::DuplicateName(existing.name.clone()));
        }
        if contact.id.is_empty() || self.find_by_id(&contact.id).is_some() {
            return Err(AppError::Validation(format!(
                "Contact id '{}' is empty or already taken",
                contact.id
            )));
        }

        let mut contacts = Vec::with_capacity(self.contacts.len() + 1);
        contacts.push(contact);
        contacts.extend(self.contacts.iter().cloned());

        Ok(Self {
            contacts,
            filter_text: self.filter_text.clone(),
        })
    }

    pub fn without_contact(&self, id: &str) -> Self {
        Self {
            contacts: self
                .contacts
                .iter()
                .filter(|c| c.id != id)
                .cloned()
                .collect(),
            filter_text: self.filter_text.clone(),
        }
    }

    pub fn with_filter(&self, text: &str) -> Self {
        Self {
            contacts: self.contacts.clone(),
            filter_text: text.to_string(),
        }
    }
}

/// Checks that ids are present and unique, and that names are non-empty and
/// unique ignoring case.
pub fn check_contacts(contacts: &[Contact]) -> Result<(), AppError> {
    let mut ids: HashSet<&str> = HashSet::with_capacity(contacts.len());
    let mut names: HashSet<String> = HashSet::with_capacity(contacts.len());

    for contact in contacts {
        if contact.id.is_empty() {
            return Err(AppError::Validation(format!(
                "Contact '{}' has no id",
                contact.name
            )));
        }
        if contact.name.trim().is_empty() {
            return Err(AppError::Validation(format!(
                "Contact '{}' has an empty name",
                contact.id
            )));
        }
        if !ids.insert(contact.id.as_str()) {
            return Err(AppError::Validation(format!(
                "Contact id '{}' appears more than once",
                contact.id
            )));
        }
        if !names.insert(contact.name.to_lowercase()) {
            return Err(AppError::DuplicateName(contact.name.clone()));
        }
    }
    Ok(())
}
