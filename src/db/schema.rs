pub(crate) const SCHEMA_V1: &str = r#"
CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER NOT NULL
);

CREATE TABLE IF NOT EXISTS transactions (
    id        INTEGER PRIMARY KEY AUTOINCREMENT,
    amount    TEXT NOT NULL,
    category  TEXT NOT NULL,
    type      TEXT NOT NULL CHECK (type IN ('income', 'expense')),
    date      TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_transactions_date ON transactions(date);
CREATE INDEX IF NOT EXISTS idx_transactions_category ON transactions(category);

CREATE TABLE IF NOT EXISTS budgets (
    id        INTEGER PRIMARY KEY AUTOINCREMENT,
    category  TEXT NOT NULL,
    budget    TEXT NOT NULL,
    month     TEXT NOT NULL,
    year      TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_budgets_key ON budgets(category, year, month);
"#;

pub(crate) const CURRENT_VERSION: i32 = 1;

/// Migrations from version N to N+1.
/// Each entry is (from_version, sql). Additive only.
pub(crate) const MIGRATIONS: &[(i32, &str)] = &[];
