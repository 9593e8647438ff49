mod backup;
mod budgets;
mod ledger;
mod schema;

use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

use crate::error::LedgerResult;

pub(crate) use backup::restore_from;

/// Owned handle to the ledger database. Every store operation goes through it;
/// the connection is released by [`Database::close`] or on drop.
pub(crate) struct Database {
    conn: Connection,
}

impl Database {
    pub(crate) fn open(path: &Path) -> LedgerResult<Self> {
        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")?;
        let mut db = Self { conn };
        db.migrate()?;
        tracing::debug!(path = %path.display(), "opened ledger database");
        Ok(db)
    }

    #[cfg(test)]
    pub(crate) fn open_in_memory() -> LedgerResult<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        let mut db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    /// Release the underlying handle, surfacing any error SQLite reports on close.
    pub(crate) fn close(self) -> LedgerResult<()> {
        self.conn.close().map_err(|(_, e)| e.into())
    }

    fn migrate(&mut self) -> LedgerResult<()> {
        let has_version_table: bool = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name='schema_version')",
            [],
            |row| row.get(0),
        )?;

        if !has_version_table {
            // Fresh database
            let tx = self.conn.transaction()?;
            tx.execute_batch(schema::SCHEMA_V1)?;
            tx.execute(
                "INSERT INTO schema_version (version) VALUES (?1)",
                params![schema::CURRENT_VERSION],
            )?;
            tx.commit()?;
            return Ok(());
        }

        // An empty version table means nothing has been applied yet.
        let current: i32 = self
            .conn
            .query_row("SELECT version FROM schema_version LIMIT 1", [], |row| {
                row.get(0)
            })
            .optional()?
            .unwrap_or(0);

        let tx = self.conn.transaction()?;
        for &(from_version, sql) in schema::MIGRATIONS {
            if current <= from_version {
                tx.execute_batch(sql)?;
            }
        }
        if current < schema::CURRENT_VERSION {
            tx.execute(
                "UPDATE schema_version SET version = ?1",
                params![schema::CURRENT_VERSION],
            )?;
            tracing::info!(from = current, to = schema::CURRENT_VERSION, "migrated schema");
        }
        tx.commit()?;

        Ok(())
    }
}
