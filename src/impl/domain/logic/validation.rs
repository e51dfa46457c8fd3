use fractic_server_error::ServerError;

use crate::{
    entities::{ExpenseField, ExpenseRecord},
    errors::MissingRequiredFields,
};

/// Required fields that are blank after trimming, in form order.
pub(crate) fn missing_fields(record: &ExpenseRecord) -> Vec<ExpenseField> {
    ExpenseField::ALL
        .into_iter()
        .filter(|f| record.get(*f).trim().is_empty())
        .collect()
}

pub(crate) fn validate(record: &ExpenseRecord) -> Result<(), ServerError> {
    let missing = missing_fields(record);
    if missing.is_empty() {
        Ok(())
    } else {
        let ids = missing.iter().map(|f| f.id()).collect::<Vec<_>>().join(", ");
        Err(MissingRequiredFields::new(&ids))
    }
}
