use std::path::PathBuf;

use anyhow::Result;
use chrono::{Local, Utc};
use log::{debug, info};

use crate::config::Config;
use crate::feed::fetch_all;
use crate::logger::init_logger;
use crate::models::{Digest, Skipped};
use crate::output::write_digest;
use crate::pipeline::build_digest;
use crate::utils::format_run_summary;

/// What a finished run produced, for the stdout summary.
pub struct RunReport {
    pub output_path: PathBuf,
    pub digest: Digest,
    pub rejected: usize,
    pub skipped: Vec<Skipped>,
}

pub async fn run_digest(config_path: Option<PathBuf>, output_path: Option<PathBuf>) -> Result<()> {
    // 0) Initialize logger
    init_logger()?;
    debug!("Logger initialized");

    // 1) Load config, creating the default one on first run
    let config_path = match config_path {
        Some(path) => path,
        None => {
            let outcome = Config::ensure_user_config()?;
            if outcome.created {
                info!(
                    "Config file created at {} with default feeds and keywords.",
                    outcome.path.display()
                );
            }
            outcome.path
        }
    };
    let mut cfg = Config::load(&config_path)?;
    if let Some(path) = output_path {
        cfg.output_path = path;
    }
    debug!("Config loaded from {}", config_path.display());

    // 2) Fetch feeds one at a time
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()?;

    info!("Fetching {} feeds", cfg.feeds.len());
    let fetched = fetch_all(&client, &cfg.feeds, Utc::now(), &cfg.limits).await;

    // 3) Classify, rank, pick standouts and assemble
    let run = build_digest(fetched.entries, fetched.skipped, &cfg, Local::now())?;

    // 4) Persist the snapshot
    write_digest(&run.digest, &cfg.output_path)?;

    let report = RunReport {
        output_path: cfg.output_path,
        digest: run.digest,
        rejected: run.rejected,
        skipped: run.skipped,
    };
    println!("{}", format_run_summary(&report));

    Ok(())
}
