#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// A toast message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }
}

// Standard messages.
// ---

pub const DRAFT_SAVED: &str = "Draft saved locally.";
pub const DRAFT_SAVE_FAILED: &str = "Could not save draft.";
pub const FILL_REQUIRED_FIELDS: &str = "Please fill all required fields.";
pub const EXPENSE_SUBMITTED: &str = "Expense submitted.";
pub const SUBMISSION_FAILED: &str = "Submission failed. Please try again.";
