use anyhow::{anyhow, Context, Result};
use ftail::Ftail;
use log::{info, LevelFilter};
use std::env;
use std::fs;

const LOGS_DIR: &str = ".logs";
const PKG_NAME: &str = env!("CARGO_PKG_NAME");

/// Warnings and up go to the console; the full run log is appended to
/// `~/.logs/football_digest/football_digest.log`.
pub fn init_logger() -> Result<()> {
    let home_folder = env::home_dir().ok_or_else(|| anyhow!("Could not determine $HOME"))?;

    let logs_path = home_folder.join(LOGS_DIR).join(PKG_NAME);
    let logs_file = logs_path.join(format!("{}.log", PKG_NAME));

    fs::create_dir_all(&logs_path)
        .with_context(|| format!("Could not create logs dir at {}", logs_path.display()))?;

    Ftail::new()
        .console(LevelFilter::Warn)
        .single_file(&logs_file, true, LevelFilter::Info)
        .init()
        .map_err(|e| anyhow!("Could not initialize logger: {}", e))?;

    info!("Logger initialized.");
    Ok(())
}
