use rusqlite::{params, Connection};
use std::path::Path;

use super::{schema, Database};
use crate::error::{LedgerError, LedgerResult};

impl Database {
    /// Write a consistent snapshot of the open database to `dest`.
    pub(crate) fn backup_to(&self, dest: &Path) -> LedgerResult<()> {
        if dest.exists() {
            return Err(LedgerError::validation(format!(
                "Backup target already exists: {}",
                dest.display()
            )));
        }
        let dest_str = dest.to_str().ok_or_else(|| {
            LedgerError::validation(format!("Backup path is not valid UTF-8: {}", dest.display()))
        })?;
        self.conn.execute("VACUUM INTO ?1", params![dest_str])?;
        tracing::info!(dest = %dest.display(), "database backed up");
        Ok(())
    }
}

/// Replace the database file at `db_path` with the snapshot at `backup`.
///
/// The live database must not be open. The copy is a plain file replace and
/// is not atomic with respect to other writers.
pub(crate) fn restore_from(backup: &Path, db_path: &Path) -> LedgerResult<()> {
    verify_snapshot(backup)?;

    for suffix in ["-wal", "-shm"] {
        let mut sidecar = db_path.as_os_str().to_owned();
        sidecar.push(suffix);
        let sidecar = Path::new(&sidecar);
        if sidecar.exists() {
            std::fs::remove_file(sidecar)?;
        }
    }
    std::fs::copy(backup, db_path)?;
    tracing::info!(
        backup = %backup.display(),
        db = %db_path.display(),
        "database restored"
    );
    Ok(())
}

fn verify_snapshot(backup: &Path) -> LedgerResult<()> {
    if !backup.is_file() {
        return Err(LedgerError::validation(format!(
            "Backup file not found: {}",
            backup.display()
        )));
    }
    let conn = Connection::open(backup)?;
    let version: Option<i32> = conn
        .query_row("SELECT version FROM schema_version LIMIT 1", [], |row| {
            row.get(0)
        })
        .ok();
    match version {
        Some(v) if v <= schema::CURRENT_VERSION => Ok(()),
        Some(v) => Err(LedgerError::validation(format!(
            "Backup schema version {v} is newer than supported version {}",
            schema::CURRENT_VERSION
        ))),
        None => Err(LedgerError::validation(format!(
            "{} is not a finledger database",
            backup.display()
        ))),
    }
}
