use rusqlite::types::Type;
use rusqlite::{params, Row, ToSql};
use rust_decimal::Decimal;
use std::str::FromStr;

use super::Database;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{LedgerDate, Transaction, TxnFilter, TxnType};

const TXN_COLUMNS: &str = "id, amount, category, type, date";

impl Database {
    // ── Transactions ──────────────────────────────────────────

    /// Append a transaction and return its freshly assigned id.
    pub(crate) fn add_transaction(&self, txn: &Transaction) -> LedgerResult<i64> {
        if txn.amount < Decimal::ZERO {
            tracing::warn!(amount = %txn.amount, "recording negative amount");
        }
        self.conn.execute(
            "INSERT INTO transactions (amount, category, type, date) VALUES (?1, ?2, ?3, ?4)",
            params![
                txn.amount.to_string(),
                txn.category,
                txn.kind.as_str(),
                txn.date.to_string(),
            ],
        )?;
        let id = self.conn.last_insert_rowid();
        tracing::info!(id, kind = %txn.kind, amount = %txn.amount, "transaction added");
        Ok(id)
    }

    /// Overwrite every field of transaction `id`.
    pub(crate) fn update_transaction(&self, id: i64, txn: &Transaction) -> LedgerResult<()> {
        let changed = self.conn.execute(
            "UPDATE transactions SET amount = ?1, category = ?2, type = ?3, date = ?4 WHERE id = ?5",
            params![
                txn.amount.to_string(),
                txn.category,
                txn.kind.as_str(),
                txn.date.to_string(),
                id,
            ],
        )?;
        if changed == 0 {
            return Err(LedgerError::not_found("Transaction", id));
        }
        tracing::info!(id, "transaction updated");
        Ok(())
    }

    pub(crate) fn delete_transaction(&self, id: i64) -> LedgerResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM transactions WHERE id = ?1", params![id])?;
        if changed == 0 {
            return Err(LedgerError::not_found("Transaction", id));
        }
        tracing::info!(id, "transaction deleted");
        Ok(())
    }

    pub(crate) fn get_transaction(&self, id: i64) -> LedgerResult<Option<Transaction>> {
        let result = self.conn.query_row(
            &format!("SELECT {TXN_COLUMNS} FROM transactions WHERE id = ?1"),
            params![id],
            txn_from_row,
        );
        match result {
            Ok(t) => Ok(Some(t)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Transactions matching `filter`, in insertion order.
    pub(crate) fn query_transactions(&self, filter: &TxnFilter) -> LedgerResult<Vec<Transaction>> {
        let mut sql = format!("SELECT {TXN_COLUMNS} FROM transactions WHERE 1=1");
        let mut param_values: Vec<Box<dyn ToSql>> = Vec::new();

        if let Some(category) = &filter.category {
            sql.push_str(&format!(" AND category = ?{}", param_values.len() + 1));
            param_values.push(Box::new(category.clone()));
        }
        if let Some(kind) = filter.kind {
            sql.push_str(&format!(" AND type = ?{}", param_values.len() + 1));
            param_values.push(Box::new(kind.as_str()));
        }
        if let Some(period) = filter.period {
            sql.push_str(&format!(" AND date LIKE ?{}", param_values.len() + 1));
            param_values.push(Box::new(format!("{}%", period.date_prefix())));
        }

        sql.push_str(" ORDER BY id ASC");

        let params_ref: Vec<&dyn ToSql> = param_values.iter().map(|p| p.as_ref()).collect();

        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(params_ref.as_slice(), txn_from_row)?;
        let txns = rows.collect::<std::result::Result<Vec<_>, _>>()?;
        debug_assert!(txns.iter().all(|t| filter.matches(t)));
        tracing::debug!(?filter, count = txns.len(), "queried transactions");
        Ok(txns)
    }

    pub(crate) fn get_transaction_count(&self) -> LedgerResult<i64> {
        Ok(self
            .conn
            .query_row("SELECT COUNT(*) FROM transactions", [], |row| row.get(0))?)
    }
}

fn txn_from_row(row: &Row<'_>) -> rusqlite::Result<Transaction> {
    let amount: String = row.get(1)?;
    let kind: String = row.get(3)?;
    let date: String = row.get(4)?;
    Ok(Transaction {
        id: Some(row.get(0)?),
        amount: Decimal::from_str(&amount).map_err(|e| conversion_error(1, e))?,
        category: row.get(2)?,
        kind: TxnType::parse(&kind).map_err(|e| conversion_error(3, e))?,
        date: LedgerDate::parse(&date).map_err(|e| conversion_error(4, e))?,
    })
}

pub(super) fn conversion_error<E>(idx: usize, err: E) -> rusqlite::Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(err))
}
