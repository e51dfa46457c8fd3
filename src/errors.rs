use fractic_server_error::{define_client_error, define_internal_error};

// Storage-related.
define_internal_error!(ReadError, "Error reading draft '{key}'.", { key: &str });
define_internal_error!(WriteError, "Error writing draft '{key}'.", { key: &str });
define_client_error!(InvalidDraft, "Stored draft '{key}' is not a valid expense record.", { key: &str });

// Configuration.
define_client_error!(InvalidConfig, "Invalid form configuration (invalid RON format).");

// Validation.
define_client_error!(
    MissingRequiredFields,
    "Missing required fields: {fields}.",
    { fields: &str }
);

// Submission.
define_client_error!(SubmissionFailed, "Submission failed: {details}.", { details: &str });
