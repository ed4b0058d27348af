use super::*;

use std::{cell::RefCell, collections::HashMap, rc::Rc};

/// In-memory key-value storage. Clones share the same map, so a handle kept
/// outside a [`crate::domain::ContactStore`] sees everything the store wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryAdapter {
    data: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, text: &str) -> Self {
        let adapter = Self::new();
        adapter
            .data
            .borrow_mut()
            .insert(key.to_string(), text.to_string());
        adapter
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.data.borrow().get(key).cloned()
    }
}

impl PersistenceAdapter for MemoryAdapter {
    fn read(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.get(key))
    }

    fn write(&self, key: &str, text: &str) -> Result<(), AppError> {
        self.data
            .borrow_mut()
            .insert(key.to_string(), text.to_string());
        Ok(())
    }

    fn medium(&self) -> &str {
        "memory"
    }
}
