use super::*;

use crate::storage::{CONTACTS_STORAGE_KEY, snapshot};
use tracing::{debug, error, info, warn};
use uuid::Uuid;

type Listener = Box<dyn FnMut(&ContactListState)>;

/// Single owner of the phonebook state.
///
/// Every operation is one synchronous transition: the new state replaces the
/// old one, add and delete write a snapshot through the adapter, and then all
/// subscribers are called with the new state. Storage failures are logged and
/// never returned; the in-memory state stays authoritative for the session.
pub struct ContactStore {
    state: ContactListState,
    storage: Box<dyn PersistenceAdapter>,
    listeners: Vec<Listener>,
}

impl ContactStore {
    /// Loads the saved contact list, or the seed contacts when there is none
    /// or it cannot be parsed. Never writes to storage.
    pub fn hydrate(storage: Box<dyn PersistenceAdapter>) -> Self {
        let state = hydrate_state(storage.as_ref());

        Self {
            state,
            storage,
            listeners: Vec::new(),
        }
    }

    pub fn state(&self) -> &ContactListState {
        &self.state
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&ContactListState) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn add_contact(&mut self, candidate: NewContact) -> Result<&ContactListState, AppError> {
        candidate.validate()?;

        if let Some(existing) = self.state.find_by_name(&candidate.name) {
            debug!(target: "phonebook::store", name = %existing.name, "Rejected duplicate contact");
            return Err(AppError::DuplicateName(existing.name.clone()));
        }

        let contact = candidate.into_contact(self.fresh_id());
        debug!(target: "phonebook::store", id = %contact.id, name = %contact.name, "Adding contact");

        let next = self.state.with_contact(contact)?;
        Ok(self.commit(next, true))
    }

    /// Removing an unknown id leaves the list as it was.
    pub fn delete_contact(&mut self, id: &str) -> &ContactListState {
        let next = self.state.without_contact(id);

        if next.len() == self.state.len() {
            debug!(target: "phonebook::store", id, "No contact to delete");
        } else {
            debug!(target: "phonebook::store", id, "Deleted contact");
        }

        self.commit(next, true)
    }

    pub fn set_filter(&mut self, text: &str) -> &ContactListState {
        let next = self.state.with_filter(text);
        self.commit(next, false)
    }

    pub fn visible_contacts(&self) -> Vec<&Contact> {
        visible_contacts(&self.state)
    }

    /// Writes the current contacts. Errors are logged, not returned.
    fn persist(&self) {
        let result = snapshot::serialize(self.state.contacts())
            .and_then(|text| self.storage.write(CONTACTS_STORAGE_KEY, &text));

        if let Err(e) = result {
            error!(
                target: "phonebook::store",
                medium = self.storage.medium(),
                error = %e,
                "Failed to persist contacts"
            );
        }
    }

    fn commit(&mut self, next: ContactListState, persist: bool) -> &ContactListState {
        self.state = next;

        if persist {
            self.persist();
        }

        for listener in self.listeners.iter_mut() {
            listener(&self.state);
        }

        &self.state
    }

    fn fresh_id(&self) -> String {
        loop {
            let id = Uuid::new_v4().to_string();
            if self.state.find_by_id(&id).is_none() {
                return id;
            }
        }
    }
}

/// Reads the snapshot from `storage`, falling back to the seed contacts.
pub fn hydrate_state(storage: &dyn PersistenceAdapter) -> ContactListState {
    let text = match storage.read(CONTACTS_STORAGE_KEY) {
        Ok(Some(text)) if !text.is_empty() => text,
        Ok(_) => {
            info!(target: "phonebook::store", medium = storage.medium(), "No saved contacts, using seed list");
            return ContactListState::seeded();
        }
        Err(e) => {
            warn!(
                target: "phonebook::store",
                medium = storage.medium(),
                error = %e,
                "Could not read saved contacts, using seed list"
            );
            return ContactListState::seeded();
        }
    };

    match snapshot::deserialize(&text).map(ContactListState::from_checked) {
        Ok(state) => {
            info!(target: "phonebook::store", medium = storage.medium(), count = state.len(), "Loaded contacts");
            state
        }
        Err(e) => {
            warn!(
                target: "phonebook::store",
                medium = storage.medium(),
                error = %e,
                "Saved contacts are malformed, using seed list"
            );
            ContactListState::seeded()
        }
    }
}
