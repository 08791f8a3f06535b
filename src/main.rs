//! Snapcrawl main entry point
//!
//! Command-line interface for the headless-browser site archiver.

use anyhow::Result;
use clap::Parser;
use snapcrawl::config::{load_file_config, resolve, Overrides};
use snapcrawl::crawler::crawl;
use snapcrawl::output::print_report;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Snapcrawl: archive web pages as MHTML + markup + screenshot
///
/// Renders each page in headless Chromium, optionally logging in through a
/// generic form flow first, and optionally crawling same-origin links
/// breadth-first up to a configured depth.
#[derive(Parser, Debug)]
#[command(name = "snapcrawl")]
#[command(version = "1.0.0")]
#[command(about = "A headless-browser site archiver", long_about = None)]
struct Cli {
    /// Seed URL to archive
    #[arg(long, value_name = "URL")]
    url: Option<String>,

    /// Output directory for capture artifacts (default: output)
    #[arg(long, value_name = "DIR")]
    out: Option<PathBuf>,

    /// Maximum crawl depth from the seed; 0 archives only the seed
    #[arg(long, value_name = "DEPTH")]
    depth: Option<u32>,

    /// Enable the form login flow before rendering
    #[arg(long, env = "LOGIN_ENABLED", value_name = "BOOL")]
    login: Option<bool>,

    /// Path to an optional TOML configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// User agent applied to every page
    #[arg(long, env = "USER_AGENT", value_name = "UA")]
    user_agent: Option<String>,

    /// Login form page (falls back to the target URL)
    #[arg(long, env = "LOGIN_URL", value_name = "URL")]
    login_url: Option<String>,

    /// Selector for the username field
    #[arg(long, env = "LOGIN_USER_SELECTOR", value_name = "SELECTOR")]
    login_user_selector: Option<String>,

    /// Selector for the password field
    #[arg(long, env = "LOGIN_PASS_SELECTOR", value_name = "SELECTOR")]
    login_pass_selector: Option<String>,

    /// Selector for the submit control; Enter is pressed if unset
    #[arg(long, env = "LOGIN_SUBMIT_SELECTOR", value_name = "SELECTOR")]
    login_submit_selector: Option<String>,

    /// Login username
    #[arg(long, env = "LOGIN_USER", value_name = "USER")]
    login_user: Option<String>,

    /// Login password
    #[arg(long, env = "LOGIN_PASS", value_name = "PASS", hide_env_values = true)]
    login_pass: Option<String>,

    /// Path to a Chrome/Chromium executable (auto-detected if unset)
    #[arg(long, value_name = "PATH")]
    chrome_path: Option<String>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    // Optional TOML layer below flags and environment
    let file_config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            Some(load_file_config(path).inspect_err(|e| {
                tracing::error!("Failed to load configuration: {}", e);
            })?)
        }
        None => None,
    };

    let overrides = Overrides {
        seed_url: cli.url,
        max_depth: cli.depth,
        output_dir: cli.out,
        user_agent: cli.user_agent,
        login_enabled: cli.login,
        login_url: cli.login_url,
        user_selector: cli.login_user_selector,
        pass_selector: cli.login_pass_selector,
        submit_selector: cli.login_submit_selector,
        username: cli.login_user,
        password: cli.login_pass,
        chrome_path: cli.chrome_path,
    };

    let config = match resolve(overrides, file_config) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            return Err(e.into());
        }
    };

    let report = match crawl(config).await {
        Ok(report) => report,
        Err(e) => {
            tracing::error!("Crawl failed: {}", e);
            return Err(e.into());
        }
    };

    print_report(&report);

    if !report.is_clean() {
        tracing::warn!("{} page(s) failed to capture", report.pages_failed);
        std::process::exit(1);
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("snapcrawl=info,warn"),
            1 => EnvFilter::new("snapcrawl=debug,info"),
            2 => EnvFilter::new("snapcrawl=trace,debug"),
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
