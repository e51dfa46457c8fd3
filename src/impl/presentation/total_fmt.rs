/// Renders an estimated total with exactly two decimals and no grouping
/// ("22.05", "1000.00", "-3.50"). A zero total never renders as "-0.00".
pub(crate) fn format_total(total: f64) -> String {
    let formatted = format!("{:.2}", total);
    match formatted.strip_prefix('-') {
        Some(rest) if rest.bytes().all(|b| b == b'0' || b == b'.') => rest.to_string(),
        _ => formatted,
    }
}
