use super::*;

#[test]
fn formats_a_regular_date() {
    assert_eq!(format_long_date("2025-07-31"), "31 de julio de 2025");
}

#[test]
fn formats_every_month_boundary() {
    assert_eq!(format_long_date("2025-01-01"), "1 de enero de 2025");
    assert_eq!(format_long_date("2025-12-31"), "31 de diciembre de 2025");
}

#[test]
fn empty_input_formats_empty() {
    assert_eq!(format_long_date(""), "");
}

#[test]
fn unparseable_input_is_returned_verbatim() {
    assert_eq!(format_long_date("pronto"), "pronto");
    assert_eq!(format_long_date("2025-13-01"), "2025-13-01");
    assert_eq!(format_long_date("2025-00-10"), "2025-00-10");
}

#[test]
fn end_not_before_start_accepts_equal_and_later_dates() {
    assert!(end_not_before_start("2025-07-01", "2025-07-01"));
    assert!(end_not_before_start("2025-07-01", "2025-08-15"));
    assert!(end_not_before_start("2024-12-31", "2025-01-01"));
}

#[test]
fn end_not_before_start_rejects_earlier_end() {
    assert!(!end_not_before_start("2025-07-02", "2025-07-01"));
    assert!(!end_not_before_start("2025-02-01", "2024-12-31"));
}

#[test]
fn end_not_before_start_rejects_unparseable_dates() {
    assert!(!end_not_before_start("", "2025-07-01"));
    assert!(!end_not_before_start("2025-07-01", "mañana"));
}
