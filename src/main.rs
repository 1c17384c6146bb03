//! Fortiscrape main entry point
//!
//! This is the command-line interface for the FortiGuard listing scraper.

use anyhow::Context;
use clap::Parser;
use fortiscrape::config::{load_config_with_hash, Config};
use fortiscrape::scraper::scrape;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Fortiscrape: a FortiGuard encyclopedia listing scraper
///
/// Fetches the paginated IPS listings for each configured risk level,
/// extracts title/link entries, and writes one CSV per level plus a JSON
/// log of pages whose fetch permanently failed.
#[derive(Parser, Debug)]
#[command(name = "fortiscrape")]
#[command(version = "1.0.0")]
#[command(about = "A FortiGuard encyclopedia listing scraper", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (defaults apply when omitted)
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be scraped without fetching
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load and validate configuration
    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("failed to load config {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => {
            tracing::info!("No config file given, using built-in defaults");
            Config::default()
        }
    };

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    scrape(config).await.context("scrape run failed")?;
    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("fortiscrape=info,warn"),
            1 => EnvFilter::new("fortiscrape=debug,info"),
            2 => EnvFilter::new("fortiscrape=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: validates config and shows the planned run
fn handle_dry_run(config: &Config) {
    println!("=== Fortiscrape Dry Run ===\n");

    println!("Target:");
    println!("  Base URL: {}", config.scraper.base_url);
    println!("  Risk levels: {:?}", config.scraper.risk_levels);
    println!("  Pages per level: {}", config.scraper.max_pages_per_level);

    println!("\nRetry:");
    println!("  Max attempts: {}", config.retry.max_attempts);
    println!(
        "  Backoff: {}ms - {}ms",
        config.retry.min_backoff_ms, config.retry.max_backoff_ms
    );

    println!("\nHTTP:");
    println!("  Timeout: {}s", config.http.timeout_secs);
    println!("  User-Agent: {}", config.http.user_agent);

    println!("\nOutput:");
    println!("  Datasets dir: {}", config.output.datasets_dir);
    println!("  Skip log: {}", config.output.skipped_path);

    let total_pages =
        config.scraper.risk_levels.len() as u64 * config.scraper.max_pages_per_level as u64;
    println!("\n✓ Configuration is valid");
    println!("✓ Would fetch {} pages", total_pages);
}
