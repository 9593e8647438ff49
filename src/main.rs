mod config;
mod db;
mod error;
mod logging;
mod models;
mod report;
mod run;
mod util;

use anyhow::Result;

fn main() -> Result<()> {
    logging::init();

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let db_flag = run::take_flag(&mut args, "--db")?;
    let config = config::Config::resolve(db_flag.as_deref())?;
    tracing::debug!(db = %config.db_path.display(), "resolved configuration");

    run::dispatch(&args, &config)
}
