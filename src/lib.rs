pub mod builders;
pub mod config;
pub mod dispatch;
pub mod facts;
pub mod report;
pub mod run;
pub mod vocab;

pub use config::SeedConfig;
pub use report::{CreateFailure, EntityKind, SeedCounts, SeedReport};
pub use run::{SeedError, run_seed};
