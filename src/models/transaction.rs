use rust_decimal::Decimal;

use super::LedgerDate;
use crate::error::{LedgerError, LedgerResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxnType {
    Income,
    Expense,
}

impl TxnType {
    /// Stored form, always lowercase.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    /// Case-insensitive; anything other than income/expense is rejected.
    pub fn parse(s: &str) -> LedgerResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(LedgerError::validation(format!(
                "Type '{other}' must be 'income' or 'expense'"
            ))),
        }
    }
}

impl std::fmt::Display for TxnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One ledger entry. `amount` is a magnitude; `kind` carries its meaning.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: Option<i64>,
    pub amount: Decimal,
    pub category: String,
    pub kind: TxnType,
    pub date: LedgerDate,
}

impl Transaction {
    pub fn new(amount: Decimal, category: String, kind: TxnType, date: LedgerDate) -> Self {
        Self {
            id: None,
            amount,
            category,
            kind,
            date,
        }
    }

    /// Signed view for display: expenses negative, income positive.
    pub fn signed_amount(&self) -> Decimal {
        match self.kind {
            TxnType::Income => self.amount,
            TxnType::Expense => -self.amount,
        }
    }
}
