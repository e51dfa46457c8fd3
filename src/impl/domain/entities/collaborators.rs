use async_trait::async_trait;
use fractic_server_error::ServerError;

use super::expense_record::{Attachment, ExpenseRecord};

// Storage.
// ---

/// A device-local key-value store holding serialized drafts.
///
/// Calls are synchronous and unguarded: with several writers on the same key,
/// the last write wins.
pub trait DraftStorage {
    fn get(&self, key: &str) -> Result<Option<String>, ServerError>;
    fn set(&self, key: &str, value: &str) -> Result<(), ServerError>;
    /// Removing a key that does not exist is not an error.
    fn remove(&self, key: &str) -> Result<(), ServerError>;
}

impl<T: DraftStorage + ?Sized> DraftStorage for &T {
    fn get(&self, key: &str) -> Result<Option<String>, ServerError> {
        (**self).get(key)
    }
    fn set(&self, key: &str, value: &str) -> Result<(), ServerError> {
        (**self).set(key, value)
    }
    fn remove(&self, key: &str) -> Result<(), ServerError> {
        (**self).remove(key)
    }
}

// Submission.
// ---

/// Delivers a finished expense record to wherever it is recorded.
#[async_trait]
pub trait ExpenseSubmitter: Send + Sync {
    async fn submit(
        &self,
        record: &ExpenseRecord,
        attachment: Option<&Attachment>,
    ) -> Result<(), ServerError>;
}
