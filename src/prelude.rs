pub use crate::cli::{command, run_app};
pub use crate::domain::{
    Contact, ContactListState, ContactStore, NewContact,
    contact::{self, seed_contacts},
    search::{filter_by_name, visible_contacts},
};
pub use crate::errors::AppError;
pub use crate::storage::{
    self, CONTACTS_STORAGE_KEY, JsonFileAdapter, MemoryAdapter, PersistenceAdapter,
    storage_port::{ImportReport, export_contacts_to_csv, import_contacts_from_csv},
};
