use std::time::Duration;

use anyhow::{Context, Result};
use pipedrive::PipedriveClient;
use rand::SeedableRng;
use rand::rngs::StdRng;
use taskifye_seeder::{SeedConfig, run_seed};
use tokio_util::sync::CancellationToken;

use crate::cli::SeedArgs;
use crate::config::AppConfig;

pub async fn run(args: SeedArgs, cfg: &AppConfig) -> Result<()> {
    let client =
        PipedriveClient::with_base_url(&cfg.pipedrive.api_token, &cfg.pipedrive.base_url);

    let user = client
        .verify_auth()
        .await
        .context("pipedrive credential check failed")?;
    tracing::info!(user = %user.name, email = %user.email, "connected to pipedrive");

    let seed_cfg = SeedConfig {
        organizations: args.organizations,
        persons: args.persons,
        deals: args.deals,
        activities: args.activities,
        delay: Duration::from_millis(args.delay_ms),
        completed_ratio: args.completed_ratio,
    };

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let cancel = CancellationToken::new();
    let interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("interrupt received, stopping after the in-flight call");
            interrupt.cancel();
        }
    });

    let report = run_seed(&client, &seed_cfg, &mut rng, &cancel).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let status = if report.cancelled {
        "cancelled (partial)"
    } else {
        "complete"
    };
    println!("Seed run {status}");
    println!("  organizations: {}", report.counts.organizations);
    println!("  persons:       {}", report.counts.persons);
    println!("  deals:         {}", report.counts.deals);
    println!("  activities:    {}", report.counts.activities);
    if !report.failures.is_empty() {
        println!("  failed creates: {}", report.failures.len());
        for failure in &report.failures {
            println!("    {} {:?}: {}", failure.kind, failure.label, failure.error);
        }
    }

    Ok(())
}
