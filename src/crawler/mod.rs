//! Crawler module: frontier management and crawl orchestration
//!
//! This module contains the core crawl logic:
//! - FIFO frontier and visited-set bookkeeping
//! - The coordinator driving render + capture per item
//! - Raw-markup link discovery feeding the frontier

mod coordinator;
mod frontier;
mod links;

pub use coordinator::Coordinator;
pub use frontier::{Frontier, FrontierItem, VisitedSet};
pub use links::discover_links;

use crate::config::Config;
use crate::output::CrawlReport;
use crate::render::ChromeArchiver;
use crate::Result;

/// Runs a complete crawl with the production browser archiver
///
/// Seeds the frontier, processes it breadth-first one item at a time, and
/// returns the run report. The report's failure count decides the process
/// exit code; this function only errors on setup problems.
pub async fn crawl(config: Config) -> Result<CrawlReport> {
    let archiver = ChromeArchiver::new(config.clone());
    let mut coordinator = Coordinator::new(config, archiver);
    coordinator.run().await
}
