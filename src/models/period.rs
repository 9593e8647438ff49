use chrono::{Datelike, NaiveDate};

use crate::error::{LedgerError, LedgerResult};

/// A calendar date as stored on a transaction.
///
/// Only constructed from a strict `YYYY-MM-DD` string, so the persisted text
/// form is always canonical and prefix filtering on it is reliable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedgerDate(NaiveDate);

impl LedgerDate {
    pub fn parse(s: &str) -> LedgerResult<Self> {
        let s = s.trim();
        let bytes = s.as_bytes();
        let shaped = bytes.len() == 10
            && bytes[4] == b'-'
            && bytes[7] == b'-'
            && bytes
                .iter()
                .enumerate()
                .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
        if !shaped {
            return Err(LedgerError::validation(format!(
                "Date '{s}' is not in YYYY-MM-DD form"
            )));
        }
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Self)
            .map_err(|_| LedgerError::validation(format!("Date '{s}' is not a calendar date")))
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }
}

impl std::fmt::Display for LedgerDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year(), self.month(), self.day())
    }
}

/// A single month of a single year. Budgets are keyed on this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    /// Parse the `MM` and `YYYY` text fields used for budget periods.
    pub fn parse(month: &str, year: &str) -> LedgerResult<Self> {
        let year = parse_year(year)?;
        let month_str = month.trim();
        let month = if month_str.len() == 2 && month_str.bytes().all(|b| b.is_ascii_digit()) {
            month_str.parse::<u32>().ok()
        } else {
            None
        }
        .filter(|m| (1..=12).contains(m))
        .ok_or_else(|| {
            LedgerError::validation(format!("Month '{month_str}' must be two digits 01-12"))
        })?;
        Ok(Self { year, month })
    }

    pub fn month_str(&self) -> String {
        format!("{:02}", self.month)
    }

    pub fn year_str(&self) -> String {
        format!("{:04}", self.year)
    }

    pub fn contains(&self, date: &LedgerDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl std::fmt::Display for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}/{:04}", self.month, self.year)
    }
}

/// Reporting window: a whole year or one month of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Year(i32),
    Month(YearMonth),
}

impl Period {
    /// Accepts `YYYY` or `YYYY-MM`.
    pub fn parse(s: &str) -> LedgerResult<Self> {
        let s = s.trim();
        match s.split_once('-') {
            Some((year, month)) => Ok(Self::Month(YearMonth::parse(month, year)?)),
            None => Ok(Self::Year(parse_year(s)?)),
        }
    }

    /// Prefix every stored date inside this window starts with.
    pub fn date_prefix(&self) -> String {
        match self {
            Self::Year(y) => format!("{y:04}-"),
            Self::Month(ym) => format!("{:04}-{:02}-", ym.year, ym.month),
        }
    }

    pub fn contains(&self, date: &LedgerDate) -> bool {
        match self {
            Self::Year(y) => date.year() == *y,
            Self::Month(ym) => ym.contains(date),
        }
    }
}

impl From<YearMonth> for Period {
    fn from(ym: YearMonth) -> Self {
        Self::Month(ym)
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Year(y) => write!(f, "{y:04}"),
            Self::Month(ym) => write!(f, "{ym}"),
        }
    }
}

fn parse_year(s: &str) -> LedgerResult<i32> {
    let s = s.trim();
    if s.len() != 4 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(LedgerError::validation(format!(
            "Year '{s}' must be four digits"
        )));
    }
    s.parse::<i32>()
        .map_err(|_| LedgerError::validation(format!("Year '{s}' must be four digits")))
}
