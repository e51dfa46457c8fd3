// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod models {
        pub(crate) mod expense_draft_model;
        pub(crate) mod numeric_text_model;
    }
    pub(crate) mod repositories {
        pub(crate) mod draft_repository_impl;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod collaborators;
        pub(crate) mod expense_record;
        pub(crate) mod form_config;
        pub(crate) mod notification;
        pub(crate) mod submission;
    }
    pub(crate) mod logic {
        pub(crate) mod notification_channel;
        pub(crate) mod total_calculator;
        pub(crate) mod validation;
    }
    pub(crate) mod repositories {
        pub(crate) mod draft_repository;
    }
    pub(crate) mod usecases {
        pub(crate) mod expense_form_controller;
    }
}

pub(crate) mod presentation {
    pub(crate) mod total_fmt;
}

// Public exports.
// ---

#[doc(hidden)]
#[allow(unused_imports)]
pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod entities {
        pub use crate::domain::entities::collaborators::*;
        pub use crate::domain::entities::expense_record::*;
        pub use crate::domain::entities::form_config::*;
        pub use crate::domain::entities::notification::*;
        pub use crate::domain::entities::submission::*;
    }
}
