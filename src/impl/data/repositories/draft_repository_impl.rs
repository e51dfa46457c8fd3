use fractic_server_error::ServerError;

use crate::{
    data::models::expense_draft_model::ExpenseDraftModel,
    domain::repositories::draft_repository::DraftRepository,
    entities::{DraftStorage, ExpenseRecord},
    errors::{InvalidDraft, WriteError},
};

/// Draft Store bound to one storage handle and one key. Two stores only see
/// each other's drafts if they share both.
pub(crate) struct DraftRepositoryImpl<S: DraftStorage> {
    storage: S,
    key: String,
}

impl<S: DraftStorage> DraftRepositoryImpl<S> {
    pub(crate) fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }
}

impl<S: DraftStorage> DraftRepository for DraftRepositoryImpl<S> {
    fn try_load(&self) -> Result<Option<ExpenseRecord>, ServerError> {
        let Some(raw) = self.storage.get(&self.key)? else {
            tracing::debug!(key = %self.key, "no stored draft");
            return Ok(None);
        };
        let model: ExpenseDraftModel =
            serde_json::from_str(&raw).map_err(|e| InvalidDraft::with_debug(&self.key, &e))?;
        tracing::debug!(key = %self.key, "loaded draft");
        Ok(Some(model.into()))
    }

    fn save(&self, record: &ExpenseRecord) -> Result<(), ServerError> {
        let raw = serde_json::to_string(&ExpenseDraftModel::from(record))
            .map_err(|e| WriteError::with_debug(&self.key, &e))?;
        self.storage.set(&self.key, &raw)?;
        tracing::debug!(key = %self.key, bytes = raw.len(), "saved draft");
        Ok(())
    }

    fn clear(&self) -> Result<(), ServerError> {
        self.storage.remove(&self.key)?;
        tracing::debug!(key = %self.key, "cleared draft");
        Ok(())
    }
}
