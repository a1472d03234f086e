use anyhow::{Context, Result};
use std::path::PathBuf;

use aiven_broker_provider::Config;

pub fn run_plans(path: PathBuf, output: String) -> Result<()> {
    let config = Config::load(&path)
        .with_context(|| format!("Failed to load broker config from {}", path.display()))?;

    if output == "json" {
        println!("{}", serde_json::to_string_pretty(&config.catalog())?);
        return Ok(());
    }

    println!(
        "{:<20} {:<20} {:<15} {:<8}",
        "SERVICE", "PLAN", "AIVEN PLAN", "VERSION"
    );
    println!("{}", "-".repeat(66));

    let mut count = 0;
    for service in &config.catalog.services {
        for plan in &service.plans {
            println!(
                "{:<20} {:<20} {:<15} {:<8}",
                service.name,
                plan.name,
                plan.aiven_plan,
                plan.elasticsearch_version.as_deref().unwrap_or("-")
            );
            count += 1;
        }
    }

    println!();
    println!("{} plan(s) in {} ({})", count, config.project, config.cloud);

    Ok(())
}
