#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::*;

fn strings(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
}

fn seeded_db() -> Database {
    let db = Database::open_in_memory().unwrap();
    for args in [
        ["3000", "salary", "income", "2024-01-05"],
        ["42.99", "groceries", "EXPENSE", "2024-01-10"],
        ["87.30", "groceries", "expense", "2024-02-05"],
    ] {
        cli_add(&strings(&args), &db).unwrap();
    }
    db
}

// ── Argument parsing ──────────────────────────────────────────

#[test]
fn test_parse_transaction_normalizes_type() {
    let txn = parse_transaction(&strings(&["$1,200.00", "rent", "Expense", "2024-03-01"])).unwrap();
    assert_eq!(txn.amount, dec!(1200.00));
    assert_eq!(txn.category, "rent");
    assert_eq!(txn.kind, TxnType::Expense);
    assert_eq!(txn.date.to_string(), "2024-03-01");
}

#[test]
fn test_filter_from_flags() {
    let filter = filter_from_flags(&strings(&[
        "--category",
        "groceries",
        "--type",
        "expense",
        "--year",
        "2024",
        "--month",
        "01",
    ]))
    .unwrap();
    assert_eq!(
        filter,
        TxnFilter::all()
            .category("groceries")
            .kind(TxnType::Expense)
            .period(YearMonth::parse("01", "2024").unwrap())
    );
    assert_eq!(
        filter_from_flags(&strings(&["--year", "2024"])).unwrap(),
        TxnFilter::all().period(Period::Year(2024))
    );
}

#[test]
fn test_filter_rejects_leftover_arguments() {
    let err = filter_from_flags(&strings(&["--year", "2024", "--mnth", "01"])).unwrap_err();
    assert!(err.to_string().contains("--mnth"));
    assert!(filter_from_flags(&strings(&["stray"])).is_err());
}

#[test]
fn test_report_rejects_extra_arguments() {
    let db = seeded_db();
    assert!(cli_report(&strings(&["2024", "junk"]), &db).is_err());
    cli_report(&strings(&["2024"]), &db).unwrap();
}

#[test]
fn test_known_commands() {
    assert!(is_command("list"));
    assert!(is_command("budget"));
    assert!(!is_command("restore"));
    assert!(!is_command("frobnicate"));
}

#[test]
fn test_filter_month_requires_year() {
    assert!(filter_from_flags(&strings(&["--month", "01"])).is_err());
    assert!(filter_from_flags(&strings(&["--type", "refund"])).is_err());
}

// ── Commands ──────────────────────────────────────────────────

#[test]
fn test_update_and_delete_commands() {
    let db = seeded_db();
    cli_update(&strings(&["2", "50", "dining", "expense", "2024-01-11"]), &db).unwrap();
    let txn = db.get_transaction(2).unwrap().unwrap();
    assert_eq!(txn.category, "dining");
    assert_eq!(txn.amount, dec!(50));

    cli_delete(&strings(&["2"]), &db).unwrap();
    assert!(db.get_transaction(2).unwrap().is_none());
    // Second delete and update on a missing id report nothing to do.
    cli_delete(&strings(&["2"]), &db).unwrap();
    cli_update(&strings(&["2", "1", "x", "income", "2024-01-01"]), &db).unwrap();
    assert_eq!(db.get_transaction_count().unwrap(), 2);
}

#[test]
fn test_wrong_arity_is_error() {
    let db = Database::open_in_memory().unwrap();
    assert!(cli_add(&strings(&["10", "food", "expense"]), &db).is_err());
    assert!(cli_delete(&[], &db).is_err());
    assert!(budget_set(&strings(&["food", "50", "01"]), &db).is_err());
    assert!(cli_budget(&strings(&["remove"]), &db).is_err());
}

#[test]
fn test_budget_commands() {
    let db = seeded_db();
    budget_set(&strings(&["groceries", "40", "01", "2024"]), &db).unwrap();
    budget_check(&strings(&["groceries", "01", "2024"]), &db).unwrap();
    budget_list(&strings(&["01", "2024"]), &db).unwrap();
    assert!(budget_set(&strings(&["groceries", "40", "13", "2024"]), &db).is_err());
    assert_eq!(
        db.find_budget("groceries", YearMonth::parse("01", "2024").unwrap())
            .unwrap()
            .limit_amount,
        dec!(40)
    );
}

// ── Export / backup ───────────────────────────────────────────

#[test]
fn test_export_to_csv_filtered() {
    let db = seeded_db();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("jan.csv");

    let filter = TxnFilter::all().period(YearMonth::parse("01", "2024").unwrap());
    let count = export_to_csv(&db, &path, &filter).unwrap();
    assert_eq!(count, 2);

    let mut rdr = csv::Reader::from_path(&path).unwrap();
    let headers = rdr.headers().unwrap().clone();
    assert_eq!(
        headers.iter().collect::<Vec<_>>(),
        vec!["id", "date", "type", "category", "amount"]
    );
    let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(&rows[0][2], "income");
    assert_eq!(&rows[1][2], "expense");
    assert_eq!(&rows[1][4], "42.99");
}

#[test]
fn test_backup_command() {
    let db = seeded_db();
    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("snap.db");
    let dest_str = dest.to_str().unwrap().to_string();

    cli_backup(&[dest_str.clone()], &db).unwrap();
    assert!(dest.exists());
    assert!(cli_backup(&[dest_str], &db).is_err());

    let copy = Database::open(&dest).unwrap();
    assert_eq!(copy.get_transaction_count().unwrap(), 3);
    copy.close().unwrap();
}
