use anyhow::{Result, bail};

use super::AppConfig;

pub fn validate(cfg: &AppConfig) -> Result<()> {
    let mut errors: Vec<String> = Vec::new();

    if cfg.pipedrive.api_token.trim().is_empty() {
        errors.push(
            "pipedrive.api_token must not be empty (set TASKIFYE_PIPEDRIVE__API_TOKEN)"
                .to_string(),
        );
    }

    if !cfg.pipedrive.base_url.starts_with("http://") && !cfg.pipedrive.base_url.starts_with("https://")
    {
        errors.push(format!(
            "pipedrive.base_url must be an http(s) url, got {:?}",
            cfg.pipedrive.base_url
        ));
    }

    if errors.is_empty() {
        return Ok(());
    }

    bail!("invalid app config:\n- {}", errors.join("\n- "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LoggingConfig, PipedriveConfig};

    fn cfg(token: &str, base_url: &str) -> AppConfig {
        AppConfig {
            pipedrive: PipedriveConfig {
                api_token: token.to_string(),
                base_url: base_url.to_string(),
            },
            logging: LoggingConfig::default(),
        }
    }

    #[test]
    fn accepts_token_with_default_url() {
        assert!(validate(&cfg("token-123", pipedrive::DEFAULT_BASE_URL)).is_ok());
    }

    #[test]
    fn rejects_missing_token_and_bad_url() {
        let err = validate(&cfg("  ", "ftp://example.test")).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("api_token"));
        assert!(message.contains("base_url"));
    }
}
