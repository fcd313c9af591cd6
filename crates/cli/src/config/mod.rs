pub mod configs;
pub mod defaults;
pub mod envconfig;
pub mod validate;

pub use configs::{AppConfig, LoggingConfig, PipedriveConfig};
pub use envconfig::EnvConfig;
