//! Display formatting for backend `YYYY-MM-DD` date strings.
//!
//! Dates are parsed field-by-field instead of going through a `Date`
//! object, so formatting cannot shift a day under the local timezone.

#[cfg(test)]
#[path = "date_test.rs"]
mod date_test;

const MONTHS: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// Format a `YYYY-MM-DD` string as `"31 de julio de 2025"`.
///
/// Empty input formats to an empty string; anything unparseable is returned
/// verbatim rather than dropped, so a malformed backend value stays visible.
pub fn format_long_date(date: &str) -> String {
    if date.is_empty() {
        return String::new();
    }
    let Some((year, month, day)) = split_ymd(date) else {
        return date.to_owned();
    };
    let month_name = MONTHS[usize::from(month) - 1];
    format!("{day} de {month_name} de {year}")
}

/// Split `YYYY-MM-DD` into numeric fields, validating ranges.
fn split_ymd(date: &str) -> Option<(u16, u8, u8)> {
    let mut parts = date.splitn(3, '-');
    let year: u16 = parts.next()?.parse().ok()?;
    let month: u8 = parts.next()?.parse().ok()?;
    let day: u8 = parts.next()?.parse().ok()?;
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return None;
    }
    Some((year, month, day))
}

/// True when `end` is on or after `start` (both `YYYY-MM-DD`). Unparseable
/// inputs compare false so form validation rejects them.
pub fn end_not_before_start(start: &str, end: &str) -> bool {
    match (split_ymd(start), split_ymd(end)) {
        (Some(start), Some(end)) => end >= start,
        _ => false,
    }
}
