#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::*;

// ── format_amount ──────────────────────────────────────────

#[test]
fn test_format_amount_basic() {
    assert_eq!(format_amount(dec!(1234.56)), "$1,234.56");
}

#[test]
fn test_format_amount_zero() {
    assert_eq!(format_amount(dec!(0)), "$0.00");
}

#[test]
fn test_format_amount_negative() {
    assert_eq!(format_amount(dec!(-42.50)), "-$42.50");
}

#[test]
fn test_format_amount_large() {
    assert_eq!(format_amount(dec!(1234567.89)), "$1,234,567.89");
}

#[test]
fn test_format_amount_pads_to_two_decimals() {
    assert_eq!(format_amount(dec!(1.5)), "$1.50");
    assert_eq!(format_amount(dec!(5)), "$5.00");
}

// ── parse_amount ───────────────────────────────────────────

#[test]
fn test_parse_amount_basic() {
    assert_eq!(parse_amount("100.50").unwrap(), dec!(100.50));
    assert_eq!(parse_amount(" 42 ").unwrap(), dec!(42));
}

#[test]
fn test_parse_amount_with_currency() {
    assert_eq!(parse_amount("$1,234.56").unwrap(), dec!(1234.56));
}

#[test]
fn test_parse_amount_negative_is_structurally_valid() {
    assert_eq!(parse_amount("-3.00").unwrap(), dec!(-3.00));
}

#[test]
fn test_parse_amount_rejects_non_numeric() {
    for bad in ["", "  ", "abc", "12.3.4", "NaN", "1e400x"] {
        let err = parse_amount(bad).unwrap_err();
        assert!(
            matches!(err, crate::error::LedgerError::Validation(_)),
            "{bad:?}"
        );
    }
}
