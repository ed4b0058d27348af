pub mod contact;
pub mod manager;
pub mod search;
pub mod state;

use crate::errors::AppError;
use crate::storage::PersistenceAdapter;

pub use contact::{Contact, NewContact, seed_contacts};
pub use manager::ContactStore;
pub use search::visible_contacts;
pub use state::ContactListState;
