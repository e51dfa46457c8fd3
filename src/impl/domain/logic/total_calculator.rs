use crate::{data::models::numeric_text_model::NumericTextModel, entities::ExpenseRecord};

/// `quantity * amount + taxes`, each read through the numeric coercion.
///
/// Never returns a non-finite value: a product that overflows counts as 0.
pub(crate) fn estimated_total(record: &ExpenseRecord) -> f64 {
    let quantity: f64 = NumericTextModel::from(record.quantity.as_str()).into();
    let amount: f64 = NumericTextModel::from(record.amount.as_str()).into();
    let taxes: f64 = NumericTextModel::from(record.taxes.as_str()).into();
    let total = quantity * amount + taxes;
    if total.is_finite() {
        total
    } else {
        0.0
    }
}
