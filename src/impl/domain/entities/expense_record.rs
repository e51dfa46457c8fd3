/// Identifies one of the eight text fields of an [`ExpenseRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpenseField {
    Vendor,
    Date,
    BillRef,
    Description,
    AccountCode,
    Quantity,
    Amount,
    Taxes,
}

impl ExpenseField {
    /// All fields, in form order. Every one of them is required.
    pub const ALL: [ExpenseField; 8] = [
        ExpenseField::Vendor,
        ExpenseField::Date,
        ExpenseField::BillRef,
        ExpenseField::Description,
        ExpenseField::AccountCode,
        ExpenseField::Quantity,
        ExpenseField::Amount,
        ExpenseField::Taxes,
    ];

    /// Stable identifier, matching the key used in the persisted draft.
    pub fn id(&self) -> &'static str {
        match self {
            ExpenseField::Vendor => "vendor",
            ExpenseField::Date => "date",
            ExpenseField::BillRef => "billRef",
            ExpenseField::Description => "description",
            ExpenseField::AccountCode => "accountCode",
            ExpenseField::Quantity => "quantity",
            ExpenseField::Amount => "amount",
            ExpenseField::Taxes => "taxes",
        }
    }

    /// Whether editing this field changes the estimated total.
    pub fn affects_total(&self) -> bool {
        matches!(
            self,
            ExpenseField::Quantity | ExpenseField::Amount | ExpenseField::Taxes
        )
    }
}

/// The single expense / receipt record edited by the form.
///
/// Numeric fields are kept as text so partial input ("1.", "-", "007") survives
/// editing untouched. An empty field is an empty string, never absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseRecord {
    pub vendor: String,
    pub date: String,
    pub bill_ref: String,
    pub description: String,
    pub account_code: String,
    pub quantity: String,
    pub amount: String,
    pub taxes: String,
}

impl ExpenseRecord {
    /// The all-empty template.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, field: ExpenseField) -> &str {
        match field {
            ExpenseField::Vendor => &self.vendor,
            ExpenseField::Date => &self.date,
            ExpenseField::BillRef => &self.bill_ref,
            ExpenseField::Description => &self.description,
            ExpenseField::AccountCode => &self.account_code,
            ExpenseField::Quantity => &self.quantity,
            ExpenseField::Amount => &self.amount,
            ExpenseField::Taxes => &self.taxes,
        }
    }

    pub fn set(&mut self, field: ExpenseField, value: impl Into<String>) {
        let slot = match field {
            ExpenseField::Vendor => &mut self.vendor,
            ExpenseField::Date => &mut self.date,
            ExpenseField::BillRef => &mut self.bill_ref,
            ExpenseField::Description => &mut self.description,
            ExpenseField::AccountCode => &mut self.account_code,
            ExpenseField::Quantity => &mut self.quantity,
            ExpenseField::Amount => &mut self.amount,
            ExpenseField::Taxes => &mut self.taxes,
        };
        *slot = value.into();
    }
}

/// Opaque reference to a receipt file picked by the user.
///
/// Only its presence matters to the form; it is never written to the draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub name: String,
    pub size_bytes: u64,
}

impl Attachment {
    pub fn new(name: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            size_bytes,
        }
    }
}
