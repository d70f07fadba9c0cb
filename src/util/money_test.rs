use super::*;

#[test]
fn price_value_parses_plain_decimals() {
    assert_eq!(price_value("99.99"), Some(99.99));
    assert_eq!(price_value(" 40 "), Some(40.0));
    assert_eq!(price_value("0"), Some(0.0));
}

#[test]
fn price_value_rejects_negatives_and_garbage() {
    assert_eq!(price_value("-1"), None);
    assert_eq!(price_value("gratis"), None);
    assert_eq!(price_value(""), None);
    assert_eq!(price_value("NaN"), None);
}

#[test]
fn format_price_pads_to_two_decimals() {
    assert_eq!(format_price("40"), "$40.00");
    assert_eq!(format_price("99.9"), "$99.90");
}

#[test]
fn format_price_falls_back_for_unparseable_input() {
    assert_eq!(format_price("n/a"), "$--");
}

#[test]
fn is_discounted_requires_original_strictly_above_discount() {
    assert!(is_discounted(Some("80.00"), "40.00"));
    assert!(!is_discounted(Some("40.00"), "40.00"));
    assert!(!is_discounted(Some("30.00"), "40.00"));
    assert!(!is_discounted(None, "40.00"));
    assert!(!is_discounted(Some("oops"), "40.00"));
}
