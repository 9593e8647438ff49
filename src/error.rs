use thiserror::Error;

/// Failures surfaced by the ledger and budget stores.
#[derive(Debug, Error)]
pub(crate) enum LedgerError {
    /// Update/delete target or budget lookup had no matching record.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// Input rejected before touching the store.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A total left the representable decimal range.
    #[error("Amount overflow: {0}")]
    Overflow(String),

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl LedgerError {
    pub(crate) fn not_found(entity: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    pub(crate) fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub(crate) fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

pub(crate) type LedgerResult<T> = std::result::Result<T, LedgerError>;
