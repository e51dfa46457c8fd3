use fractic_server_error::ServerError;

use super::expense_record::ExpenseField;

/// Phase of the submission state machine.
///
/// `Idle -> Validating -> (Idle | Submitting) -> Submitted -> Idle`. A failed
/// submission goes straight from `Submitting` back to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Validating,
    Submitting,
    Submitted,
}

/// Result of a call to `submit()`.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// The submitter accepted the record and the draft was cleared.
    Submitted,
    /// Validation failed; nothing was sent and the draft is untouched.
    Invalid { missing: Vec<ExpenseField> },
    /// The submitter failed; record and draft are kept.
    Failed { error: ServerError },
}

impl SubmitOutcome {
    pub fn is_submitted(&self) -> bool {
        matches!(self, SubmitOutcome::Submitted)
    }
}
