use anyhow::{Context, Result};
use clap::Parser;
use scout_common::observability::init_logging;
use scout_config::ScoutConfigLoader;
use wiring::{Cli, build_scout, log_config, resolve_run};

mod sink;
mod wiring;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1) Load config (file, then env, then flags)
    let cfg = match &cli.config {
        Some(path) => ScoutConfigLoader::new().with_file(path),
        None => ScoutConfigLoader::new().with_optional_file(scout_config::DEFAULT_CONFIG_FILE),
    }
    .load()
    .context("loading configuration")?;

    let log_path = init_logging(log_config(&cfg)?)?;
    let run = resolve_run(&cli, cfg)?;
    tracing::info!(
        handle = %run.handle,
        min_recommends = run.filter.min_recommends,
        log_file = %log_path.display(),
        "scout.start"
    );

    let scout = build_scout(&run)?;
    let found = scout
        .discover(&run.handle)
        .await
        .with_context(|| format!("discovering from @{}", run.handle))?;

    for handle in &found {
        println!("{handle}");
    }

    if let Some(csv_path) = &run.csv_path {
        sink::append_record(csv_path, chrono::Local::now(), &found)
            .with_context(|| format!("writing {}", csv_path.display()))?;
        tracing::info!(path = %csv_path.display(), count = found.len(), "scout.csv.appended");
    }

    Ok(())
}
