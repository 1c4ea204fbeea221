use anyhow::{bail, Context, Result};
use clap::{ArgGroup, Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use site_identify::utils::{init_logger, LogOptions};
use site_identify::{IdentifyError, Info, Resolver, StandardResolver};

// Domains resolved at once in batch mode
const MAX_CONCURRENT: usize = 10;

#[derive(Parser)]
#[command(
    name = "identify",
    about = "Identify the organization behind a website",
    version
)]
struct Cli {
    /// Output results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    verbose: bool,

    /// Configuration file (TOML, JSON or YAML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Write logs to a timestamped file in this directory
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    /// Request timeout in seconds, overrides the configuration
    #[arg(long, global = true)]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Identify metadata for a website
    #[command(visible_alias = "ws")]
    #[command(group(ArgGroup::new("target").required(true).args(["url", "domain", "batch"])))]
    Website {
        /// The URL to identify
        #[arg(long)]
        url: Option<String>,

        /// The domain to identify
        #[arg(long)]
        domain: Option<String>,

        /// File with one domain or URL per line
        #[arg(long)]
        batch: Option<PathBuf>,
    },
}

#[derive(Serialize)]
struct BatchRecord {
    input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    info: Option<Info>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logger(&LogOptions {
        verbose: cli.verbose,
        log_dir: cli.log_dir.clone(),
    })?;

    let mut config = site_identify::config::load(cli.config.as_deref())?;
    if let Some(secs) = cli.timeout {
        config.fetcher.request_timeout = Duration::from_secs(secs);
    }
    debug!("Using configuration: {:?}", config);

    let resolver = StandardResolver::from_config(&config).context("Failed to build resolver")?;

    // Ctrl-C abandons whatever is in flight
    let cancel = CancellationToken::new();
    let on_signal = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Interrupted, cancelling");
            on_signal.cancel();
        }
    });

    match cli.command {
        Commands::Website { url, domain, batch } => {
            if let Some(path) = batch {
                return process_batch(&resolver, &path, cli.json, &cancel).await;
            }

            let result = if let Some(url) = url {
                resolver.identify_website(&url, &cancel).await
            } else if let Some(domain) = domain {
                resolver.identify_domain(&domain, &cancel).await
            } else {
                bail!("Specify one of: --url, --domain, --batch");
            };

            match result {
                Ok(info) => print_info(&info, cli.json)?,
                Err(e) => {
                    report_error(&e);
                    return Err(e.into());
                }
            }
        }
    }

    Ok(())
}

async fn identify_any<R: Resolver>(
    resolver: &R,
    input: &str,
    cancel: &CancellationToken,
) -> Result<Info, IdentifyError> {
    if input.contains("://") {
        resolver.identify_website(input, cancel).await
    } else {
        resolver.identify_domain(input, cancel).await
    }
}

async fn process_batch<R: Resolver>(
    resolver: &R,
    path: &Path,
    json: bool,
    cancel: &CancellationToken,
) -> Result<()> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let inputs: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect();

    info!("Processing {} entries from {}", inputs.len(), path.display());
    let start = Instant::now();

    let mut records = Vec::with_capacity(inputs.len());
    for chunk in inputs.chunks(MAX_CONCURRENT) {
        let futures = chunk.iter().map(|input| identify_any(resolver, input, cancel));
        let results = futures::future::join_all(futures).await;

        for (input, result) in chunk.iter().zip(results) {
            records.push(match result {
                Ok(info) => BatchRecord {
                    input: input.to_string(),
                    info: Some(info),
                    error: None,
                },
                Err(e) => BatchRecord {
                    input: input.to_string(),
                    info: None,
                    error: Some(e.to_string()),
                },
            });
        }

        if cancel.is_cancelled() {
            break;
        }
    }

    let failed = records.iter().filter(|r| r.error.is_some()).count();
    info!(
        "Processed {} entries in {:?} ({} failed)",
        records.len(),
        start.elapsed(),
        failed
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    for record in &records {
        println!("== {}", record.input);
        match (&record.info, &record.error) {
            (Some(info), _) => println!("{}", info),
            (None, Some(error)) => println!("      Error: {}", error),
            (None, None) => {}
        }
        println!();
    }
    println!("Processed: {}  Successful: {}  Failed: {}", records.len(), records.len() - failed, failed);

    Ok(())
}

fn print_info(info: &Info, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(info)?);
    } else {
        println!("{}", info);
    }
    Ok(())
}

fn report_error(err: &IdentifyError) {
    if let IdentifyError::Unresolved(resolve) = err {
        eprintln!("Could not identify {}. Tried:", resolve.domain());
        for attempt in resolve.attempts() {
            eprintln!("  {}: {}", attempt.candidate, attempt.error);
        }
    }
}
