use std::time::Duration;

use fractic_server_error::ServerError;
use tokio::sync::watch;

use crate::{
    data::repositories::draft_repository_impl::DraftRepositoryImpl,
    domain::{
        repositories::draft_repository::DraftRepository as _,
        usecases::expense_form_controller::ExpenseFormController,
    },
    entities::{
        Attachment, DraftStorage, ExpenseField, ExpenseRecord, ExpenseSubmitter, FormConfig,
        Notification, SubmissionPhase, SubmitOutcome,
    },
    ext::standard_submitters::SimulatedSubmitter,
};

/// Expense entry form: the live record, its local draft, and submission.
///
/// The draft lives under `config.storage_key` in `storage`. Forms sharing a
/// storage handle must use different keys to keep separate drafts.
pub struct ExpenseFormUtil<D, S = SimulatedSubmitter>
where
    D: DraftStorage,
    S: ExpenseSubmitter,
{
    controller: ExpenseFormController<DraftRepositoryImpl<D>, S>,
}

impl<D: DraftStorage> ExpenseFormUtil<D, SimulatedSubmitter> {
    /// Form backed by the simulated submitter, with its latency taken from
    /// `config`.
    pub fn new(storage: D, config: FormConfig) -> Self {
        let submitter = SimulatedSubmitter::new(config.submit_latency());
        Self::with_submitter(storage, submitter, config)
    }
}

impl<D, S> ExpenseFormUtil<D, S>
where
    D: DraftStorage,
    S: ExpenseSubmitter,
{
    pub fn with_submitter(storage: D, submitter: S, config: FormConfig) -> Self {
        let draft = DraftRepositoryImpl::new(storage, config.storage_key.clone());
        Self {
            controller: ExpenseFormController::initialize(draft, submitter, &config),
        }
    }

    // Record.
    // ---

    pub fn record(&self) -> &ExpenseRecord {
        self.controller.record()
    }

    pub fn field(&self, key: ExpenseField) -> &str {
        self.controller.field(key)
    }

    pub fn update_field(&mut self, key: ExpenseField, value: impl Into<String>) {
        self.controller.update_field(key, value)
    }

    pub fn set_attachment(&mut self, attachment: Option<Attachment>) {
        self.controller.set_attachment(attachment)
    }

    pub fn attachment(&self) -> Option<&Attachment> {
        self.controller.attachment()
    }

    pub fn has_attachment(&self) -> bool {
        self.controller.attachment().is_some()
    }

    /// Clears the form on screen. Does not touch the saved draft.
    pub fn reset(&mut self) {
        self.controller.reset()
    }

    // Totals.
    // ---

    /// `quantity * amount + taxes`, formatted with two decimals.
    pub fn estimated_total(&self) -> String {
        self.controller.estimated_total()
    }

    pub fn compute_total(&self) -> String {
        self.controller.compute_total()
    }

    // Validation.
    // ---

    pub fn missing_fields(&self) -> Vec<ExpenseField> {
        self.controller.missing_fields()
    }

    pub fn validate(&self) -> Result<(), ServerError> {
        self.controller.validate()
    }

    // Draft & submission.
    // ---

    pub fn save(&mut self) -> Result<(), ServerError> {
        self.controller.save()
    }

    pub async fn submit(&mut self) -> SubmitOutcome {
        self.controller.submit().await
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.controller.phase()
    }

    pub fn subscribe_phase(&self) -> watch::Receiver<SubmissionPhase> {
        self.controller.subscribe_phase()
    }

    pub fn can_submit(&self) -> bool {
        self.controller.can_submit()
    }

    // Notifications.
    // ---

    pub fn notification(&self) -> Option<&Notification> {
        self.controller.notification()
    }

    pub fn notification_remaining(&self) -> Option<Duration> {
        self.controller.notification_remaining()
    }

    pub fn dismiss_notification(&mut self) {
        self.controller.dismiss_notification()
    }
}

/// Direct access to one draft slot, without a form around it.
pub struct DraftStore<D: DraftStorage> {
    repository: DraftRepositoryImpl<D>,
}

impl<D: DraftStorage> DraftStore<D> {
    pub fn new(storage: D, key: impl Into<String>) -> Self {
        Self {
            repository: DraftRepositoryImpl::new(storage, key),
        }
    }

    /// The stored draft, or the empty template if there is none or it cannot
    /// be read.
    pub fn load(&self) -> ExpenseRecord {
        self.repository.load()
    }

    pub fn try_load(&self) -> Result<Option<ExpenseRecord>, ServerError> {
        self.repository.try_load()
    }

    pub fn save(&self, record: &ExpenseRecord) -> Result<(), ServerError> {
        self.repository.save(record)
    }

    pub fn clear(&self) -> Result<(), ServerError> {
        self.repository.clear()
    }
}
