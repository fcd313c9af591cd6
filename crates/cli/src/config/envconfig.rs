use ::config as config_rs;
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

/// Loads a config struct from `TASKIFYE_*` environment variables, with a
/// `.env` file honored when present. Nested fields use `__`:
/// `TASKIFYE_PIPEDRIVE__API_TOKEN`, `TASKIFYE_LOGGING__RUST_LOG`.
pub trait EnvConfig: Sized + DeserializeOwned {
    const PREFIX: &'static str = "TASKIFYE";
    const SEPARATOR: &'static str = "__";

    fn load_dotenv() {
        let _ = dotenvy::dotenv();
    }

    fn validate(&self) -> Result<()> {
        Ok(())
    }

    fn from_env() -> Result<Self> {
        Self::load_dotenv();

        let settings = config_rs::Config::builder()
            .add_source(
                config_rs::Environment::with_prefix(Self::PREFIX)
                    .prefix_separator("_")
                    .separator(Self::SEPARATOR)
                    .try_parsing(true),
            )
            .build()
            .context("failed to read environment variables for config")?;

        let cfg = settings
            .try_deserialize::<Self>()
            .context("failed to deserialize environment into config")?;

        cfg.validate()?;
        Ok(cfg)
    }
}
