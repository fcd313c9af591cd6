use anyhow::{Context, Result};
use pipedrive::PipedriveClient;

use crate::config::AppConfig;

pub async fn run(cfg: &AppConfig) -> Result<()> {
    let client =
        PipedriveClient::with_base_url(&cfg.pipedrive.api_token, &cfg.pipedrive.base_url);

    let user = client
        .verify_auth()
        .await
        .context("pipedrive credential check failed")?;

    println!("Connected as {} <{}> (user id {})", user.name, user.email, user.id);
    Ok(())
}
