use crate::prelude::{Contact, ContactListState};

/// Contacts whose name contains the state's filter text, ignoring case.
/// An empty filter matches everything. List order is kept.
pub fn visible_contacts(state: &ContactListState) -> Vec<&Contact> {
    filter_by_name(state.contacts(), state.filter_text())
}

pub fn filter_by_name<'a>(contacts: &'a [Contact], filter: &str) -> Vec<&'a Contact> {
    if filter.is_empty() {
        return contacts.iter().collect();
    }

    let needle = filter.to_lowercase();
    contacts
        .iter()
        .filter(|c| c.name_contains(&needle))
        .collect()
}
