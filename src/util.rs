use rust_decimal::Decimal;
use std::str::FromStr;

use crate::error::{LedgerError, LedgerResult};

/// Format a decimal amount with thousand separators and 2 decimal places.
/// e.g. `1234567.89` → `"1,234,567.89"`
pub(crate) fn format_amount(val: Decimal) -> String {
    let abs = val.abs().round_dp(2);
    let formatted = format!("{abs:.2}");
    let mut parts = formatted.split('.');
    let int_part = parts.next().unwrap_or("0");
    let dec_part = parts.next().unwrap_or("00");

    let with_commas: String = int_part
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(",");

    if val < Decimal::ZERO {
        format!("-${with_commas}.{dec_part}")
    } else {
        format!("${with_commas}.{dec_part}")
    }
}

/// Parse a user-entered amount. Accepts an optional `$` and thousands commas.
pub(crate) fn parse_amount(s: &str) -> LedgerResult<Decimal> {
    let cleaned = s.trim().replace(['$', ','], "");
    if cleaned.is_empty() {
        return Err(LedgerError::validation("Amount is empty"));
    }
    Decimal::from_str(&cleaned)
        .map_err(|_| LedgerError::validation(format!("Amount '{}' is not a number", s.trim())))
}

#[cfg(test)]
#[path = "util_tests.rs"]
mod tests;
