use fractic_server_error::ServerError;
use tokio::sync::watch;

use crate::{
    domain::{
        logic::{
            notification_channel::NotificationChannel, total_calculator::estimated_total,
            validation,
        },
        repositories::draft_repository::DraftRepository,
    },
    entities::{
        Attachment, ExpenseField, ExpenseRecord, ExpenseSubmitter, FormConfig, Notification,
        SubmissionPhase, SubmitOutcome, DRAFT_SAVED, DRAFT_SAVE_FAILED, EXPENSE_SUBMITTED,
        FILL_REQUIRED_FIELDS, SUBMISSION_FAILED,
    },
    presentation::total_fmt::format_total,
};

/// Owns the live record and drives save / submit.
pub(crate) struct ExpenseFormController<R, S>
where
    R: DraftRepository,
    S: ExpenseSubmitter,
{
    draft: R,
    submitter: S,
    record: ExpenseRecord,
    attachment: Option<Attachment>,
    total: f64,
    phase: watch::Sender<SubmissionPhase>,
    notifications: NotificationChannel,
}

impl<R, S> ExpenseFormController<R, S>
where
    R: DraftRepository,
    S: ExpenseSubmitter,
{
    /// Starts from the stored draft, or from the empty template if there is
    /// none or it cannot be read.
    pub(crate) fn initialize(draft: R, submitter: S, config: &FormConfig) -> Self {
        let record = draft.load();
        let total = estimated_total(&record);
        let (phase, _) = watch::channel(SubmissionPhase::Idle);
        tracing::info!(total = %format_total(total), "expense form initialized");
        Self {
            draft,
            submitter,
            record,
            attachment: None,
            total,
            phase,
            notifications: NotificationChannel::new(config.toast_duration()),
        }
    }

    // Record.
    // ---

    pub(crate) fn record(&self) -> &ExpenseRecord {
        &self.record
    }

    pub(crate) fn field(&self, key: ExpenseField) -> &str {
        self.record.get(key)
    }

    pub(crate) fn update_field(&mut self, key: ExpenseField, value: impl Into<String>) {
        self.record.set(key, value);
        if key.affects_total() {
            self.total = estimated_total(&self.record);
        }
        tracing::debug!(field = key.id(), "field updated");
    }

    pub(crate) fn set_attachment(&mut self, attachment: Option<Attachment>) {
        tracing::debug!(
            attachment = attachment.as_ref().map(|a| a.name.as_str()),
            size_bytes = attachment.as_ref().map(|a| a.size_bytes),
            "attachment changed"
        );
        self.attachment = attachment;
    }

    pub(crate) fn attachment(&self) -> Option<&Attachment> {
        self.attachment.as_ref()
    }

    /// Empties the in-memory record and attachment. The stored draft is left
    /// alone.
    pub(crate) fn reset(&mut self) {
        self.record = ExpenseRecord::empty();
        self.attachment = None;
        self.total = estimated_total(&self.record);
    }

    // Totals.
    // ---

    /// Total kept in sync by `update_field`.
    pub(crate) fn estimated_total(&self) -> String {
        format_total(self.total)
    }

    /// Total recomputed from the current record.
    pub(crate) fn compute_total(&self) -> String {
        format_total(estimated_total(&self.record))
    }

    // Validation.
    // ---

    pub(crate) fn missing_fields(&self) -> Vec<ExpenseField> {
        validation::missing_fields(&self.record)
    }

    pub(crate) fn validate(&self) -> Result<(), ServerError> {
        validation::validate(&self.record)
    }

    // Draft.
    // ---

    /// Stores the record as-is (no validation) and confirms with a toast.
    pub(crate) fn save(&mut self) -> Result<(), ServerError> {
        match self.draft.save(&self.record) {
            Ok(()) => {
                tracing::info!("draft saved");
                self.notifications.show(Notification::success(DRAFT_SAVED));
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = ?e, "draft could not be saved");
                self.notifications.show(Notification::error(DRAFT_SAVE_FAILED));
                Err(e)
            }
        }
    }

    // Submission.
    // ---

    pub(crate) fn phase(&self) -> SubmissionPhase {
        *self.phase.borrow()
    }

    pub(crate) fn subscribe_phase(&self) -> watch::Receiver<SubmissionPhase> {
        self.phase.subscribe()
    }

    /// Whether the submit action is enabled.
    pub(crate) fn can_submit(&self) -> bool {
        self.phase() == SubmissionPhase::Idle
    }

    /// Validates, hands the record to the submitter and, once it is accepted,
    /// clears the stored draft. The in-memory record is kept either way.
    pub(crate) async fn submit(&mut self) -> SubmitOutcome {
        // `&mut self` rules out overlapping calls, and an interrupted call
        // resets the phase on drop.
        debug_assert!(self.can_submit(), "submit entered outside Idle");

        self.phase.send_replace(SubmissionPhase::Validating);
        if let Err(e) = self.validate() {
            tracing::info!(error = ?e, "submission rejected");
            self.notifications
                .show(Notification::error(FILL_REQUIRED_FIELDS));
            self.phase.send_replace(SubmissionPhase::Idle);
            return SubmitOutcome::Invalid {
                missing: self.missing_fields(),
            };
        }

        self.phase.send_replace(SubmissionPhase::Submitting);
        let result = {
            let mut guard = ResetIfInterrupted {
                phase: &self.phase,
                armed: true,
            };
            let result = self
                .submitter
                .submit(&self.record, self.attachment.as_ref())
                .await;
            guard.armed = false;
            result
        };

        match result {
            Ok(()) => {
                self.phase.send_replace(SubmissionPhase::Submitted);
                tracing::info!(vendor = %self.record.vendor, "expense submitted");
                self.notifications
                    .show(Notification::success(EXPENSE_SUBMITTED));
                if let Err(e) = self.draft.clear() {
                    tracing::warn!(error = ?e, "submitted draft could not be cleared");
                }
                self.phase.send_replace(SubmissionPhase::Idle);
                SubmitOutcome::Submitted
            }
            Err(error) => {
                tracing::warn!(error = ?error, "expense submission failed");
                self.notifications
                    .show(Notification::error(SUBMISSION_FAILED));
                self.phase.send_replace(SubmissionPhase::Idle);
                SubmitOutcome::Failed { error }
            }
        }
    }

    // Notifications.
    // ---

    pub(crate) fn notification(&self) -> Option<&Notification> {
        self.notifications.current()
    }

    pub(crate) fn notification_remaining(&self) -> Option<std::time::Duration> {
        self.notifications.remaining()
    }

    pub(crate) fn dismiss_notification(&mut self) {
        self.notifications.dismiss();
    }
}

/// Puts the phase back to `Idle` if a submit future is dropped while the
/// submitter is still running.
struct ResetIfInterrupted<'a> {
    phase: &'a watch::Sender<SubmissionPhase>,
    armed: bool,
}

impl Drop for ResetIfInterrupted<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        self.phase.send_if_modified(|phase| {
            if *phase == SubmissionPhase::Submitting {
                *phase = SubmissionPhase::Idle;
                true
            } else {
                false
            }
        });
    }
}
