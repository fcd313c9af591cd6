mod check;
mod cli;
mod config;
mod logging;
mod seed;

use anyhow::Result;
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    let cfg = config::AppConfig::from_env()?;
    logging::init_tracing(&cfg.logging.rust_log);

    match cli.command {
        cli::Commands::Seed(args) => seed::run(args, &cfg).await,
        cli::Commands::Check => check::run(&cfg).await,
    }
}
