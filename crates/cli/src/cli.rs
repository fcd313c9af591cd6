use clap::{Parser, Subcommand};
use taskifye_seeder::config::{
    DEFAULT_ACTIVITIES, DEFAULT_COMPLETED_RATIO, DEFAULT_DEALS, DEFAULT_DELAY_MS,
    DEFAULT_ORGANIZATIONS, DEFAULT_PERSONS,
};

#[derive(Parser)]
#[command(author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Populate the connected Pipedrive account with synthetic demo data
    Seed(SeedArgs),
    /// Verify the configured API token and show the connected user
    Check,
}

#[derive(Parser, Clone)]
pub struct SeedArgs {
    /// Organizations to create
    #[arg(long, default_value_t = DEFAULT_ORGANIZATIONS)]
    pub organizations: usize,
    /// Persons to create (spread round-robin across organizations)
    #[arg(long, default_value_t = DEFAULT_PERSONS)]
    pub persons: usize,
    /// Deals to create
    #[arg(long, default_value_t = DEFAULT_DEALS)]
    pub deals: usize,
    /// Activities to create
    #[arg(long, default_value_t = DEFAULT_ACTIVITIES)]
    pub activities: usize,
    /// Milliseconds between consecutive create calls
    #[arg(long, default_value_t = DEFAULT_DELAY_MS)]
    pub delay_ms: u64,
    /// Fraction of activities marked done (0.0-1.0)
    #[arg(long, default_value_t = DEFAULT_COMPLETED_RATIO)]
    pub completed_ratio: f64,
    /// RNG seed for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,
    /// Print the run report as JSON instead of the summary
    #[arg(long)]
    pub json: bool,
}
