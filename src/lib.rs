//! Snapcrawl: a headless-browser site archiver
//!
//! This crate renders web pages in headless Chromium and persists each page
//! as three artifacts (MHTML snapshot, post-render markup, full-page PNG),
//! optionally logging in through a generic form flow first and optionally
//! crawling same-origin links breadth-first up to a configured depth.

pub mod config;
pub mod crawler;
pub mod output;
pub mod render;
pub mod url;

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for snapcrawl operations
#[derive(Debug, Error)]
pub enum SnapError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to launch browser: {0}")]
    BrowserLaunch(String),

    #[error("DevTools protocol error: {0}")]
    Cdp(#[from] chromiumoxide::error::CdpError),

    #[error("Navigation failed for {url}: {message}")]
    Navigation { url: String, message: String },

    #[error("Navigation to {url} timed out after {seconds}s")]
    NavigationTimeout { url: String, seconds: u64 },

    #[error("Failed to write markup to {path}: {source}")]
    MarkupWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Screenshot failed for {url}: {message}")]
    Screenshot { url: String, message: String },

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for snapcrawl operations
pub type Result<T> = std::result::Result<T, SnapError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{crawl, Coordinator};
pub use output::CrawlReport;
pub use url::{page_origin, same_origin, sanitize_file_stem};
