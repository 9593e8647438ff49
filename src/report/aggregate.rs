use rust_decimal::Decimal;

use crate::db::Database;
use crate::error::{LedgerError, LedgerResult};
use crate::models::TxnFilter;

/// Total `amount` over every transaction matching `filter`.
/// No matches sums to exactly zero.
pub(crate) fn sum(db: &Database, filter: &TxnFilter) -> LedgerResult<Decimal> {
    let total = db
        .query_transactions(filter)?
        .iter()
        .try_fold(Decimal::ZERO, |acc, t| acc.checked_add(t.amount))
        .ok_or_else(|| {
            LedgerError::Overflow(format!("sum of transactions matching {filter:?}"))
        })?;
    tracing::debug!(?filter, %total, "summed transactions");
    Ok(total)
}
