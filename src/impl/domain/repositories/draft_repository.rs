use fractic_server_error::ServerError;

use crate::entities::ExpenseRecord;

/// The single draft slot of a form.
pub trait DraftRepository {
    /// Reads the stored draft. `Ok(None)` if no draft has been saved.
    fn try_load(&self) -> Result<Option<ExpenseRecord>, ServerError>;

    fn save(&self, record: &ExpenseRecord) -> Result<(), ServerError>;

    fn clear(&self) -> Result<(), ServerError>;

    /// Like `try_load`, but never fails: a missing, unreadable or corrupt
    /// draft yields the empty template.
    fn load(&self) -> ExpenseRecord {
        match self.try_load() {
            Ok(Some(record)) => record,
            Ok(None) => ExpenseRecord::empty(),
            Err(e) => {
                tracing::warn!(error = ?e, "discarding unreadable draft");
                ExpenseRecord::empty()
            }
        }
    }
}
