use super::{Period, TxnType};

/// Selection criteria shared by ledger queries and sums. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TxnFilter {
    pub category: Option<String>,
    pub kind: Option<TxnType>,
    pub period: Option<Period>,
}

impl TxnFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn kind(mut self, kind: TxnType) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn period(mut self, period: impl Into<Period>) -> Self {
        self.period = Some(period.into());
        self
    }

    pub fn matches(&self, txn: &super::Transaction) -> bool {
        self.category.as_deref().map_or(true, |c| txn.category == c)
            && self.kind.map_or(true, |k| txn.kind == k)
            && self.period.map_or(true, |p| p.contains(&txn.date))
    }
}
