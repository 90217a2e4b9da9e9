use anyhow::{Result, anyhow};
use clap::Parser;
use scout_common::observability::{LogConfig, LogFormat};
use scout_config::ScoutConfig;
use scout_social::medium::{
    FixedDelay, Handle, MediumApi, MediumSettings, ResponseFilter, Scout,
};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Find interesting people among those who respond to the writers you follow on Medium.
#[derive(Debug, Parser)]
#[command(name = "scout", version)]
pub struct Cli {
    /// Medium handle to start from (with or without the leading `@`).
    #[arg(short = 'n', long = "name")]
    pub handle: Option<String>,

    /// Minimum recommends a response needs to count.
    #[arg(short = 'r', long = "min-recommends")]
    pub min_recommends: Option<u64>,

    /// Config file; defaults to ./scout.yaml when present.
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// CSV file the result is appended to.
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Pause after each post's responses are fetched, in milliseconds.
    #[arg(long = "delay-ms")]
    pub delay_ms: Option<u64>,

    /// Print results only; do not append to the CSV file.
    #[arg(long)]
    pub no_csv: bool,
}

/// Everything one run needs, after config and flags are merged.
#[derive(Debug, Clone)]
pub struct RunSettings {
    pub handle: Handle,
    pub filter: ResponseFilter,
    pub medium: MediumSettings,
    pub response_delay: Duration,
    pub csv_path: Option<PathBuf>,
}

pub fn resolve_run(cli: &Cli, cfg: ScoutConfig) -> Result<RunSettings> {
    let raw_handle = cli
        .handle
        .clone()
        .or(cfg.handle)
        .ok_or_else(|| anyhow!("no handle given: pass --name or set `handle` in the config"))?;
    let handle = raw_handle.trim().trim_start_matches('@');
    if handle.is_empty() {
        return Err(anyhow!("handle must not be empty"));
    }

    let min_recommends = cli.min_recommends.unwrap_or(cfg.min_recommends);
    let window = time::Duration::days(cfg.medium.recency_days);
    let delay_ms = cli.delay_ms.unwrap_or(cfg.medium.response_delay_ms);
    let csv_path = if cli.no_csv {
        None
    } else {
        Some(cli.output.clone().unwrap_or(cfg.output.csv_path))
    };

    Ok(RunSettings {
        handle: Handle::from(handle),
        filter: ResponseFilter::new(min_recommends).with_window(window),
        medium: MediumSettings {
            origin: cfg.medium.origin,
            request_timeout: Duration::from_secs(cfg.medium.request_timeout_secs),
        },
        response_delay: Duration::from_millis(delay_ms),
        csv_path,
    })
}

pub fn log_config(cfg: &ScoutConfig) -> Result<LogConfig> {
    Ok(LogConfig {
        log_dir: cfg.logging.dir.clone(),
        emit_stderr: cfg.logging.stderr,
        format: cfg.logging.format.parse::<LogFormat>()?,
        default_filter: cfg.logging.filter.clone(),
        ..LogConfig::default()
    })
}

pub fn build_scout(run: &RunSettings) -> Result<Scout> {
    let api = MediumApi::new(&run.medium)?;
    Ok(Scout::new(
        api,
        Arc::new(FixedDelay(run.response_delay)),
        run.filter,
    ))
}
