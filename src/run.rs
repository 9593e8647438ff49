mod cli;

use anyhow::{Context, Result};
use std::path::Path;

use crate::config::Config;
use crate::db::{self, Database};

/// Run one command against the configured database.
pub(crate) fn dispatch(args: &[String], config: &Config) -> Result<()> {
    match args.first().map(String::as_str) {
        None | Some("--help" | "-h" | "help") => {
            cli::print_usage();
            Ok(())
        }
        Some("--version" | "-V" | "version") => {
            println!("finledger {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        // Runs with the live database closed.
        Some("restore") => restore(&args[1..], &config.db_path),
        Some(other) if !cli::is_command(other) => {
            cli::print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
        Some(_) => {
            let db = Database::open(&config.db_path).with_context(|| {
                format!("Failed to open database: {}", config.db_path.display())
            })?;
            let result = cli::as_cli(args, &db);
            db.close().context("Failed to close database")?;
            result
        }
    }
}

fn restore(args: &[String], db_path: &Path) -> Result<()> {
    let Some(src) = args.first() else {
        anyhow::bail!("Usage: finledger restore <file>");
    };
    let src = shellexpand(src);
    db::restore_from(Path::new(&src), db_path)
        .with_context(|| format!("Failed to restore from {src}"))?;
    println!("Database restored from {src}");
    Ok(())
}

/// Remove `flag` and its value from `args`, returning the value.
pub(crate) fn take_flag(args: &mut Vec<String>, flag: &str) -> Result<Option<String>> {
    let Some(pos) = args.iter().position(|a| a == flag) else {
        return Ok(None);
    };
    if pos + 1 >= args.len() {
        anyhow::bail!("{flag} requires a value");
    }
    let value = args.remove(pos + 1);
    args.remove(pos);
    Ok(Some(value))
}

pub(crate) fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
        format!("{home}/{rest}")
    } else {
        path.to_string()
    }
}
