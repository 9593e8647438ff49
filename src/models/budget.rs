use rust_decimal::Decimal;

use super::YearMonth;

/// Spending ceiling for one category in one month.
///
/// `category` is compared byte-for-byte with transaction categories.
#[derive(Debug, Clone, PartialEq)]
pub struct Budget {
    pub id: Option<i64>,
    pub category: String,
    pub limit_amount: Decimal,
    /// Format: "MM"
    pub month: String,
    /// Format: "YYYY"
    pub year: String,
}

impl Budget {
    pub fn new(category: String, limit_amount: Decimal, period: YearMonth) -> Self {
        Self {
            id: None,
            category,
            limit_amount,
            month: period.month_str(),
            year: period.year_str(),
        }
    }
}
