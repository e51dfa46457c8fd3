use std::sync::LazyLock;

use regex::Regex;

static LEADING_DECIMAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^-?(?:\d+(?:\.\d*)?|\.\d+)").expect("hardcoded regex should be valid")
});

/// Numeric value read out of free-text form input.
///
/// Conversion is total: everything except digits, '.' and a leading '-' is
/// dropped ("12-3" -> 123, "--5" -> -5), then the longest leading decimal
/// number is taken ("-12.5kg" -> -12.5, "1.2.3" -> 1.2). Input without a usable number, or one that overflows to a
/// non-finite value, reads as 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct NumericTextModel(pub f64);

impl From<&str> for NumericTextModel {
    fn from(s: &str) -> Self {
        let mut filtered = String::with_capacity(s.len());
        for c in s.chars() {
            // A minus sign only counts as the first character kept.
            if c.is_ascii_digit() || c == '.' || (c == '-' && filtered.is_empty()) {
                filtered.push(c);
            }
        }
        let value = LEADING_DECIMAL
            .find(&filtered)
            .and_then(|m| m.as_str().parse::<f64>().ok())
            .filter(|v| v.is_finite())
            .unwrap_or(0.0);
        NumericTextModel(value)
    }
}

impl Into<f64> for NumericTextModel {
    fn into(self) -> f64 {
        self.0
    }
}
