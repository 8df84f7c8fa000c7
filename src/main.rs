mod app;
mod classifier;
mod config;
mod digest;
mod feed;
mod keywords;
mod logger;
mod models;
mod output;
mod pipeline;
mod ranker;
mod standouts;
mod utils;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

#[derive(Parser)]
#[command(name = "football_digest")]
#[command(about = "Weekly football news digest from RSS feeds")]
struct Cli {
    /// Read this config file instead of the XDG one
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the digest here instead of the configured output_path
    #[arg(long)]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    app::run_digest(cli.config, cli.output).await
}
