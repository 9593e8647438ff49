use rusqlite::{params, Row};
use rust_decimal::Decimal;
use std::str::FromStr;

use super::ledger::conversion_error;
use super::Database;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Budget, YearMonth};

impl Database {
    // ── Budgets ───────────────────────────────────────────────

    /// Always inserts a new record; an existing budget for the same
    /// (category, month, year) is left in place and keeps precedence.
    pub(crate) fn set_budget(&self, budget: &Budget) -> LedgerResult<i64> {
        let existing: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM budgets WHERE category = ?1 AND month = ?2 AND year = ?3",
            params![budget.category, budget.month, budget.year],
            |row| row.get(0),
        )?;
        if existing > 0 {
            tracing::warn!(
                category = %budget.category,
                month = %budget.month,
                year = %budget.year,
                existing,
                "budget already set for this period; the earliest one stays in effect"
            );
        }
        self.conn.execute(
            "INSERT INTO budgets (category, budget, month, year) VALUES (?1, ?2, ?3, ?4)",
            params![
                budget.category,
                budget.limit_amount.to_string(),
                budget.month,
                budget.year,
            ],
        )?;
        let id = self.conn.last_insert_rowid();
        tracing::info!(id, category = %budget.category, limit = %budget.limit_amount, "budget set");
        Ok(id)
    }

    /// Exact match on all three key fields. With duplicates, the first
    /// inserted record wins.
    pub(crate) fn find_budget(&self, category: &str, period: YearMonth) -> LedgerResult<Budget> {
        let result = self.conn.query_row(
            "SELECT id, category, budget, month, year FROM budgets
             WHERE category = ?1 AND month = ?2 AND year = ?3
             ORDER BY id ASC LIMIT 1",
            params![category, period.month_str(), period.year_str()],
            budget_from_row,
        );
        match result {
            Ok(b) => Ok(b),
            Err(rusqlite::Error::QueryReturnedNoRows) => Err(LedgerError::not_found(
                "Budget",
                format!("{category} {period}"),
            )),
            Err(e) => Err(e.into()),
        }
    }

    /// Every budget record for a month, in insertion order.
    pub(crate) fn get_budgets(&self, period: YearMonth) -> LedgerResult<Vec<Budget>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, category, budget, month, year FROM budgets
             WHERE month = ?1 AND year = ?2 ORDER BY id ASC",
        )?;
        let rows = stmt.query_map(
            params![period.month_str(), period.year_str()],
            budget_from_row,
        )?;
        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }
}

fn budget_from_row(row: &Row<'_>) -> rusqlite::Result<Budget> {
    let amt_str: String = row.get(2)?;
    Ok(Budget {
        id: Some(row.get(0)?),
        category: row.get(1)?,
        limit_amount: Decimal::from_str(&amt_str).map_err(|e| conversion_error(2, e))?,
        month: row.get(3)?,
        year: row.get(4)?,
    })
}
