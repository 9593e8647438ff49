#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::*;

// ── TxnType ───────────────────────────────────────────────────

#[test]
fn test_txn_type_parse_case_insensitive() {
    assert_eq!(TxnType::parse("income").unwrap(), TxnType::Income);
    assert_eq!(TxnType::parse("INCOME").unwrap(), TxnType::Income);
    assert_eq!(TxnType::parse("Expense").unwrap(), TxnType::Expense);
    assert_eq!(TxnType::parse(" expense ").unwrap(), TxnType::Expense);
}

#[test]
fn test_txn_type_rejects_unknown() {
    assert!(TxnType::parse("transfer").is_err());
    assert!(TxnType::parse("").is_err());
}

#[test]
fn test_txn_type_stored_lowercase() {
    for kind in [TxnType::Income, TxnType::Expense] {
        assert_eq!(kind.as_str(), kind.as_str().to_lowercase());
        assert_eq!(TxnType::parse(kind.as_str()).unwrap(), kind);
    }
}

// ── Transaction ───────────────────────────────────────────────

fn make_txn(kind: TxnType) -> Transaction {
    Transaction::new(
        dec!(25.00),
        "groceries".into(),
        kind,
        LedgerDate::parse("2024-01-15").unwrap(),
    )
}

#[test]
fn test_signed_amount() {
    assert_eq!(make_txn(TxnType::Income).signed_amount(), dec!(25.00));
    assert_eq!(make_txn(TxnType::Expense).signed_amount(), dec!(-25.00));
}

// ── LedgerDate ────────────────────────────────────────────────

#[test]
fn test_date_parse_valid() {
    let d = LedgerDate::parse("2024-02-29").unwrap();
    assert_eq!((d.year(), d.month(), d.day()), (2024, 2, 29));
    assert_eq!(d.to_string(), "2024-02-29");
}

#[test]
fn test_date_parse_rejects_bad_shape() {
    assert!(LedgerDate::parse("2024-1-05").is_err());
    assert!(LedgerDate::parse("01/05/2024").is_err());
    assert!(LedgerDate::parse("2024-01-5x").is_err());
    assert!(LedgerDate::parse("").is_err());
}

#[test]
fn test_date_parse_rejects_impossible_dates() {
    assert!(LedgerDate::parse("2023-02-29").is_err());
    assert!(LedgerDate::parse("2024-13-01").is_err());
    assert!(LedgerDate::parse("2024-04-31").is_err());
}

#[test]
fn test_date_parse_error_is_validation() {
    let err = LedgerDate::parse("nope").unwrap_err();
    assert!(matches!(err, crate::error::LedgerError::Validation(_)));
}

// ── Period ────────────────────────────────────────────────────

#[test]
fn test_period_parse_year_and_month() {
    assert_eq!(Period::parse("2024").unwrap(), Period::Year(2024));
    assert_eq!(
        Period::parse("2024-03").unwrap(),
        Period::Month(YearMonth {
            year: 2024,
            month: 3
        })
    );
}

#[test]
fn test_period_parse_rejects_malformed() {
    assert!(Period::parse("24").is_err());
    assert!(Period::parse("2024-13").is_err());
    assert!(Period::parse("2024-3").is_err());
    assert!(Period::parse("2024-00").is_err());
    assert!(Period::parse("abcd").is_err());
}

#[test]
fn test_period_contains() {
    let jan = LedgerDate::parse("2024-01-31").unwrap();
    let feb = LedgerDate::parse("2024-02-01").unwrap();
    let other_year = LedgerDate::parse("2023-01-10").unwrap();

    let year = Period::Year(2024);
    assert!(year.contains(&jan));
    assert!(year.contains(&feb));
    assert!(!year.contains(&other_year));

    let month = Period::parse("2024-01").unwrap();
    assert!(month.contains(&jan));
    assert!(!month.contains(&feb));
    assert!(!month.contains(&other_year));
}

#[test]
fn test_period_date_prefix() {
    assert_eq!(Period::Year(2024).date_prefix(), "2024-");
    assert_eq!(Period::parse("2024-07").unwrap().date_prefix(), "2024-07-");
}

#[test]
fn test_year_month_text_fields() {
    let ym = YearMonth::parse("01", "2024").unwrap();
    assert_eq!(ym.month_str(), "01");
    assert_eq!(ym.year_str(), "2024");
    assert_eq!(ym.to_string(), "01/2024");
    assert!(YearMonth::parse("1", "2024").is_err());
    assert!(YearMonth::parse("01", "202").is_err());
}

// ── Budget ────────────────────────────────────────────────────

#[test]
fn test_budget_new_formats_period() {
    let b = Budget::new(
        "food".into(),
        dec!(50),
        YearMonth {
            year: 2024,
            month: 1,
        },
    );
    assert_eq!(b.id, None);
    assert_eq!(b.month, "01");
    assert_eq!(b.year, "2024");
}

// ── TxnFilter ─────────────────────────────────────────────────

#[test]
fn test_filter_matches() {
    let txn = make_txn(TxnType::Expense);
    assert!(TxnFilter::all().matches(&txn));
    assert!(TxnFilter::all().category("groceries").matches(&txn));
    assert!(!TxnFilter::all().category("Groceries").matches(&txn));
    assert!(!TxnFilter::all().kind(TxnType::Income).matches(&txn));
    assert!(TxnFilter::all()
        .kind(TxnType::Expense)
        .period(Period::Year(2024))
        .matches(&txn));
    assert!(!TxnFilter::all()
        .period(Period::parse("2024-02").unwrap())
        .matches(&txn));
}
