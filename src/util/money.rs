//! Parsing and display of decimal-string money amounts.
//!
//! The backend serializes prices as decimal strings; these helpers keep the
//! parsing in one place so cards and forms render them consistently.

#[cfg(test)]
#[path = "money_test.rs"]
mod money_test;

/// Parse a backend price string into a value, rejecting negatives.
pub fn price_value(raw: &str) -> Option<f64> {
    let value: f64 = raw.trim().parse().ok()?;
    if value.is_finite() && value >= 0.0 { Some(value) } else { None }
}

/// Format a price string for display (`"40"` → `"$40.00"`). Unparseable
/// input renders as `"$--"`.
pub fn format_price(raw: &str) -> String {
    match price_value(raw) {
        Some(value) => format!("${value:.2}"),
        None => "$--".to_owned(),
    }
}

/// True when the offer has a real markdown: an original price strictly
/// above the discount price.
pub fn is_discounted(original: Option<&str>, discount: &str) -> bool {
    match (original.and_then(price_value), price_value(discount)) {
        (Some(original), Some(discount)) => original > discount,
        _ => false,
    }
}
