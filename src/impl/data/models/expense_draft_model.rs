use crate::entities::ExpenseRecord;

/// Stored form of a draft. The attachment is never part of it.
#[derive(Debug, Default, serde_derive::Serialize, serde_derive::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct ExpenseDraftModel {
    vendor: String,
    date: String,
    bill_ref: String,
    description: String,
    account_code: String,
    quantity: String,
    amount: String,
    taxes: String,
}

impl From<&ExpenseRecord> for ExpenseDraftModel {
    fn from(record: &ExpenseRecord) -> Self {
        Self {
            vendor: record.vendor.clone(),
            date: record.date.clone(),
            bill_ref: record.bill_ref.clone(),
            description: record.description.clone(),
            account_code: record.account_code.clone(),
            quantity: record.quantity.clone(),
            amount: record.amount.clone(),
            taxes: record.taxes.clone(),
        }
    }
}

impl Into<ExpenseRecord> for ExpenseDraftModel {
    fn into(self) -> ExpenseRecord {
        ExpenseRecord {
            vendor: self.vendor,
            date: self.date,
            bill_ref: self.bill_ref,
            description: self.description,
            account_code: self.account_code,
            quantity: self.quantity,
            amount: self.amount,
            taxes: self.taxes,
        }
    }
}
