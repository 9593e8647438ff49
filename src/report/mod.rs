//! Period reports and budget checks composed from the ledger and budget stores.
//!
//! Each call reads the store afresh; income and expense totals are separate
//! reads and are not isolated from writes made between them.

mod aggregate;

use rust_decimal::Decimal;

use crate::db::Database;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Period, TxnFilter, TxnType, YearMonth};

pub(crate) use aggregate::sum;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PeriodReport {
    pub(crate) period: Period,
    pub(crate) total_income: Decimal,
    pub(crate) total_expense: Decimal,
    pub(crate) net_savings: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BudgetStatus {
    Within,
    Exceeded,
}

impl BudgetStatus {
    /// Spending equal to the limit is still within budget.
    pub(crate) fn evaluate(actual: Decimal, limit: Decimal) -> Self {
        if actual > limit {
            Self::Exceeded
        } else {
            Self::Within
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum BudgetCheck {
    Checked {
        status: BudgetStatus,
        limit: Decimal,
        actual: Decimal,
    },
    NoBudgetSet,
}

pub(crate) fn period_report(db: &Database, period: Period) -> LedgerResult<PeriodReport> {
    let total_income = sum(db, &TxnFilter::all().kind(TxnType::Income).period(period))?;
    let total_expense = sum(db, &TxnFilter::all().kind(TxnType::Expense).period(period))?;
    let net_savings = total_income
        .checked_sub(total_expense)
        .ok_or_else(|| LedgerError::Overflow(format!("net savings for {period}")))?;
    Ok(PeriodReport {
        period,
        total_income,
        total_expense,
        net_savings,
    })
}

pub(crate) fn check_budget(
    db: &Database,
    category: &str,
    period: YearMonth,
) -> LedgerResult<BudgetCheck> {
    let budget = match db.find_budget(category, period) {
        Ok(b) => b,
        Err(e) if e.is_not_found() => return Ok(BudgetCheck::NoBudgetSet),
        Err(e) => return Err(e),
    };
    let actual = sum(
        db,
        &TxnFilter::all()
            .kind(TxnType::Expense)
            .category(category)
            .period(period),
    )?;
    let status = BudgetStatus::evaluate(actual, budget.limit_amount);
    tracing::debug!(category, %period, ?status, %actual, limit = %budget.limit_amount, "checked budget");
    Ok(BudgetCheck::Checked {
        status,
        limit: budget.limit_amount,
        actual,
    })
}
