use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard},
};

use fractic_server_error::ServerError;

use crate::entities::DraftStorage;

/// Process-local storage. Clones share the same slots, so several forms (or a
/// form and a test) can observe one another's drafts.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDraftStorage {
    slots: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemoryDraftStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.slots().contains_key(key)
    }

    fn slots(&self) -> MutexGuard<'_, HashMap<String, String>> {
        // A panic mid-insert cannot leave a HashMap half-written.
        self.slots.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl DraftStorage for InMemoryDraftStorage {
    fn get(&self, key: &str) -> Result<Option<String>, ServerError> {
        Ok(self.slots().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ServerError> {
        self.slots().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), ServerError> {
        self.slots().remove(key);
        Ok(())
    }
}
