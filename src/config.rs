use anyhow::{Context, Result};
use std::path::PathBuf;

pub(crate) const DB_ENV_VAR: &str = "FINLEDGER_DB";

#[derive(Debug, Clone)]
pub(crate) struct Config {
    pub(crate) db_path: PathBuf,
}

impl Config {
    /// Resolve the database location: `--db` flag, then `FINLEDGER_DB`, then
    /// the platform data directory.
    pub(crate) fn resolve(db_flag: Option<&str>) -> Result<Self> {
        let env = std::env::var(DB_ENV_VAR).ok();
        let db_path = match explicit_db_path(db_flag, env.as_deref()) {
            Some(path) => path,
            None => default_db_path()?,
        };
        Ok(Self { db_path })
    }
}

fn explicit_db_path(db_flag: Option<&str>, env: Option<&str>) -> Option<PathBuf> {
    db_flag
        .or(env)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| PathBuf::from(crate::run::shellexpand(p)))
}

fn default_db_path() -> Result<PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("com", "finledger", "FinLedger")
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    let data_dir = proj_dirs.data_dir();
    std::fs::create_dir_all(data_dir)
        .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;
    Ok(data_dir.join("finledger.db"))
}
