mod budget;
mod filter;
mod period;
mod transaction;

pub use budget::Budget;
pub use filter::TxnFilter;
pub use period::{LedgerDate, Period, YearMonth};
pub use transaction::{Transaction, TxnType};

#[cfg(test)]
mod tests;
