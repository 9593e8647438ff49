use anyhow::{Context, Result};
use std::path::Path;

use super::{shellexpand, take_flag};
use crate::db::Database;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Budget, LedgerDate, Period, Transaction, TxnFilter, TxnType, YearMonth};
use crate::report::{self, BudgetCheck, BudgetStatus};
use crate::util::{format_amount, parse_amount};

const COMMANDS: &[&str] = &[
    "add", "a", "update", "delete", "rm", "show", "list", "ls", "report", "r", "budget", "b",
    "export", "backup",
];

pub(crate) fn is_command(name: &str) -> bool {
    COMMANDS.contains(&name)
}

pub(crate) fn as_cli(args: &[String], db: &Database) -> Result<()> {
    match args[0].as_str() {
        "add" | "a" => cli_add(&args[1..], db),
        "update" => cli_update(&args[1..], db),
        "delete" | "rm" => cli_delete(&args[1..], db),
        "show" => cli_show(&args[1..], db),
        "list" | "ls" => cli_list(&args[1..], db),
        "report" | "r" => cli_report(&args[1..], db),
        "budget" | "b" => cli_budget(&args[1..], db),
        "export" => cli_export(&args[1..], db),
        "backup" => cli_backup(&args[1..], db),
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

pub(crate) fn print_usage() {
    println!("FinLedger — local-only personal finance ledger");
    println!();
    println!("Usage: finledger [--db <path>] <command>");
    println!();
    println!("Commands:");
    println!("  add <amount> <category> <income|expense> <YYYY-MM-DD>");
    println!("  update <id> <amount> <category> <income|expense> <YYYY-MM-DD>");
    println!("  delete <id>");
    println!("  show <id>");
    println!("  list                          List transactions");
    println!("    --category <name>           Exact category match");
    println!("    --type <income|expense>");
    println!("    --year <YYYY>");
    println!("    --month <MM>                Requires --year");
    println!("  report <YYYY|YYYY-MM>         Income, expenses and net savings");
    println!("  budget set <category> <amount> <MM> <YYYY>");
    println!("  budget check <category> <MM> <YYYY>");
    println!("  budget list <MM> <YYYY>");
    println!("  export <file.csv>             Export transactions (--year/--month filters)");
    println!("  backup <file>                 Snapshot the database");
    println!("  restore <file>                Replace the database with a snapshot");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
    println!();
    println!("Database: --db <path>, else $FINLEDGER_DB, else the platform data directory.");
}

// ── Transactions ──────────────────────────────────────────────

fn parse_transaction(args: &[String]) -> LedgerResult<Transaction> {
    let amount = parse_amount(&args[0])?;
    let kind = TxnType::parse(&args[2])?;
    let date = LedgerDate::parse(&args[3])?;
    Ok(Transaction::new(amount, args[1].clone(), kind, date))
}

fn parse_id(s: &str) -> Result<i64> {
    s.trim()
        .parse::<i64>()
        .with_context(|| format!("Invalid transaction ID: {s}"))
}

fn cli_add(args: &[String], db: &Database) -> Result<()> {
    if args.len() != 4 {
        anyhow::bail!("Usage: finledger add <amount> <category> <income|expense> <YYYY-MM-DD>");
    }
    let txn = parse_transaction(args)?;
    let id = db.add_transaction(&txn)?;
    println!("Transaction {id} added");
    Ok(())
}

fn cli_update(args: &[String], db: &Database) -> Result<()> {
    if args.len() != 5 {
        anyhow::bail!(
            "Usage: finledger update <id> <amount> <category> <income|expense> <YYYY-MM-DD>"
        );
    }
    let id = parse_id(&args[0])?;
    let txn = parse_transaction(&args[1..])?;
    match db.update_transaction(id, &txn) {
        Ok(()) => println!("Transaction {id} updated"),
        Err(e) if e.is_not_found() => println!("Nothing to do: {e}"),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

fn cli_delete(args: &[String], db: &Database) -> Result<()> {
    let Some(raw) = args.first() else {
        anyhow::bail!("Usage: finledger delete <id>");
    };
    let id = parse_id(raw)?;
    match db.delete_transaction(id) {
        Ok(()) => println!("Transaction {id} deleted"),
        Err(e) if e.is_not_found() => println!("Nothing to do: {e}"),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

fn cli_show(args: &[String], db: &Database) -> Result<()> {
    let Some(raw) = args.first() else {
        anyhow::bail!("Usage: finledger show <id>");
    };
    let id = parse_id(raw)?;
    match db.get_transaction(id)? {
        Some(txn) => print_transactions(std::slice::from_ref(&txn)),
        None => println!("Nothing to do: {}", LedgerError::not_found("Transaction", id)),
    }
    Ok(())
}

/// Build a filter from `--category`, `--type`, `--year` and `--month`.
fn filter_from_flags(args: &[String]) -> Result<TxnFilter> {
    let mut args = args.to_vec();
    let category = take_flag(&mut args, "--category")?;
    let kind = take_flag(&mut args, "--type")?;
    let year = take_flag(&mut args, "--year")?;
    let month = take_flag(&mut args, "--month")?;
    if let Some(extra) = args.first() {
        anyhow::bail!("Unexpected argument: {extra}");
    }

    let mut filter = TxnFilter::all();
    if let Some(c) = category {
        filter = filter.category(c);
    }
    if let Some(k) = kind {
        filter = filter.kind(TxnType::parse(&k)?);
    }
    match (year, month) {
        (Some(y), Some(m)) => filter = filter.period(YearMonth::parse(&m, &y)?),
        (Some(y), None) => filter = filter.period(Period::parse(&y)?),
        (None, Some(_)) => anyhow::bail!("--month requires --year"),
        (None, None) => {}
    }
    Ok(filter)
}

fn cli_list(args: &[String], db: &Database) -> Result<()> {
    let filter = filter_from_flags(args)?;
    let txns = db.query_transactions(&filter)?;
    if txns.is_empty() {
        println!("No transactions");
        return Ok(());
    }
    print_transactions(&txns);
    let total = db.get_transaction_count()?;
    println!("{} of {total} transactions", txns.len());
    Ok(())
}

fn print_transactions(txns: &[Transaction]) {
    println!(
        "{:<6} {:<10} {:<8} {:<20} {:>14}",
        "ID", "Date", "Type", "Category", "Amount"
    );
    println!("{}", "─".repeat(62));
    for txn in txns {
        println!(
            "{:<6} {:<10} {:<8} {:<20} {:>14}",
            txn.id.unwrap_or(0),
            txn.date,
            txn.kind,
            txn.category,
            format_amount(txn.signed_amount()),
        );
    }
}

// ── Reports ───────────────────────────────────────────────────

fn cli_report(args: &[String], db: &Database) -> Result<()> {
    if args.len() > 1 {
        anyhow::bail!("Usage: finledger report [YYYY|YYYY-MM]");
    }
    let period = match args.first() {
        Some(p) => Period::parse(p)?,
        None => Period::parse(&chrono::Local::now().format("%Y-%m").to_string())?,
    };
    let report = report::period_report(db, period)?;
    let label = match period {
        Period::Year(_) => "Yearly",
        Period::Month(_) => "Monthly",
    };

    println!("{label} Report for {}", report.period);
    println!("{}", "─".repeat(40));
    println!("  Total Income:   {}", format_amount(report.total_income));
    println!("  Total Expense:  {}", format_amount(report.total_expense));
    println!("  Net Savings:    {}", format_amount(report.net_savings));
    Ok(())
}

// ── Budgets ───────────────────────────────────────────────────

fn cli_budget(args: &[String], db: &Database) -> Result<()> {
    match args.first().map(String::as_str) {
        Some("set") => budget_set(&args[1..], db),
        Some("check") => budget_check(&args[1..], db),
        Some("list") => budget_list(&args[1..], db),
        _ => anyhow::bail!("Usage: finledger budget <set|check|list> ..."),
    }
}

fn budget_set(args: &[String], db: &Database) -> Result<()> {
    if args.len() != 4 {
        anyhow::bail!("Usage: finledger budget set <category> <amount> <MM> <YYYY>");
    }
    let limit = parse_amount(&args[1])?;
    let period = YearMonth::parse(&args[2], &args[3])?;
    let id = db.set_budget(&Budget::new(args[0].clone(), limit, period))?;
    println!(
        "Budget {id} set: {} {} for {period}",
        args[0],
        format_amount(limit)
    );
    Ok(())
}

fn budget_check(args: &[String], db: &Database) -> Result<()> {
    if args.len() != 3 {
        anyhow::bail!("Usage: finledger budget check <category> <MM> <YYYY>");
    }
    let category = &args[0];
    let period = YearMonth::parse(&args[1], &args[2])?;
    match report::check_budget(db, category, period)? {
        BudgetCheck::NoBudgetSet => {
            println!("No budget set for {category} in {period}");
        }
        BudgetCheck::Checked {
            status,
            limit,
            actual,
        } => {
            let verdict = match status {
                BudgetStatus::Within => "within budget",
                BudgetStatus::Exceeded => "budget EXCEEDED",
            };
            println!("{category} {period}: {verdict}");
            println!("  Limit:   {}", format_amount(limit));
            println!("  Spent:   {}", format_amount(actual));
            match limit.checked_sub(actual) {
                Some(left) => println!("  Left:    {}", format_amount(left)),
                None => println!("  Left:    out of range"),
            }
        }
    }
    Ok(())
}

fn budget_list(args: &[String], db: &Database) -> Result<()> {
    if args.len() != 2 {
        anyhow::bail!("Usage: finledger budget list <MM> <YYYY>");
    }
    let period = YearMonth::parse(&args[0], &args[1])?;
    let budgets = db.get_budgets(period)?;
    if budgets.is_empty() {
        println!("No budgets for {period}");
        return Ok(());
    }
    println!("{:<6} {:<20} {:>14}", "ID", "Category", "Limit");
    println!("{}", "─".repeat(42));
    for b in &budgets {
        println!(
            "{:<6} {:<20} {:>14}",
            b.id.unwrap_or(0),
            b.category,
            format_amount(b.limit_amount)
        );
    }
    Ok(())
}

// ── Files ─────────────────────────────────────────────────────

fn cli_export(args: &[String], db: &Database) -> Result<()> {
    let Some(path) = args.first().filter(|a| !a.starts_with('-')) else {
        anyhow::bail!("Usage: finledger export <file.csv> [--year YYYY] [--month MM]");
    };
    let filter = filter_from_flags(&args[1..])?;
    let output_path = shellexpand(path);
    let count = export_to_csv(db, Path::new(&output_path), &filter)?;
    if count == 0 {
        println!("No transactions to export");
    } else {
        println!("Exported {count} transactions to {output_path}");
    }
    Ok(())
}

pub(crate) fn export_to_csv(db: &Database, path: &Path, filter: &TxnFilter) -> Result<usize> {
    let txns = db.query_transactions(filter)?;
    let mut wtr = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    wtr.write_record(["id", "date", "type", "category", "amount"])?;
    for txn in &txns {
        wtr.write_record([
            txn.id.unwrap_or(0).to_string(),
            txn.date.to_string(),
            txn.kind.to_string(),
            txn.category.clone(),
            txn.amount.to_string(),
        ])?;
    }
    wtr.flush()?;
    tracing::info!(count = txns.len(), path = %path.display(), "exported transactions");
    Ok(txns.len())
}

fn cli_backup(args: &[String], db: &Database) -> Result<()> {
    let Some(dest) = args.first() else {
        anyhow::bail!("Usage: finledger backup <file>");
    };
    let dest = shellexpand(dest);
    db.backup_to(Path::new(&dest))?;
    println!("Database backed up to {dest}");
    Ok(())
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
