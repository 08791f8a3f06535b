//! Crawl coordinator - main crawl orchestration logic
//!
//! Owns the frontier and the visited set, and drives the per-item
//! sequence: dequeue, skip-if-visited, render + capture, then (below the
//! depth limit) link discovery over the markup just written.
//!
//! Failure policy is uniform across items, the seed included: a failed
//! item is logged and counted, the crawl moves on, and the final report
//! carries the failure count so the process can exit non-zero.

use crate::config::Config;
use crate::crawler::frontier::{Frontier, FrontierItem, VisitedSet};
use crate::crawler::links::discover_links;
use crate::output::{ensure_output_dir, CrawlReport};
use crate::render::{CaptureArtifacts, PageArchiver};
use crate::Result;
use std::time::Instant;
use tracing::{debug, error, info, warn};

/// Main crawler coordinator structure
pub struct Coordinator<A: PageArchiver> {
    config: Config,
    archiver: A,
    frontier: Frontier,
    visited: VisitedSet,
}

impl<A: PageArchiver> Coordinator<A> {
    /// Creates a coordinator with the seed URL queued at depth 0
    pub fn new(config: Config, archiver: A) -> Self {
        let mut frontier = Frontier::new();
        frontier.enqueue(FrontierItem {
            url: config.seed_url.clone(),
            depth: 0,
        });

        Self {
            config,
            archiver,
            frontier,
            visited: VisitedSet::new(),
        }
    }

    /// Runs the crawl until the frontier drains
    ///
    /// Returns the run report; only setup problems (an unwritable output
    /// directory) are errors, per-item failures are counted in the report.
    pub async fn run(&mut self) -> Result<CrawlReport> {
        ensure_output_dir(&self.config.output_dir)?;

        info!(
            "Starting crawl of {} (max depth {}, output {})",
            self.config.seed_url,
            self.config.max_depth,
            self.config.output_dir.display()
        );

        let start = Instant::now();
        let mut report = CrawlReport::default();

        while let Some(item) = self.frontier.dequeue() {
            if self.visited.contains(&item.url) {
                debug!("Skipping already-visited URL {}", item.url);
                report.duplicates_skipped += 1;
                continue;
            }
            self.visited.insert(&item.url);

            info!(
                "Processing {} (depth {}, {} queued)",
                item.url,
                item.depth,
                self.frontier.len()
            );

            let artifacts = match self
                .archiver
                .archive(&item.url, &self.config.output_dir)
                .await
            {
                Ok(artifacts) => {
                    report.pages_captured += 1;
                    if artifacts.mhtml_path.is_none() {
                        report.snapshots_missing += 1;
                    }
                    artifacts
                }
                Err(e) => {
                    error!("Failed to capture {}: {}", item.url, e);
                    report.pages_failed += 1;
                    continue;
                }
            };

            if item.depth < self.config.max_depth {
                report.links_discovered +=
                    self.discover_and_enqueue(&item, &artifacts).await;
            }
        }

        report.elapsed = start.elapsed();

        info!(
            "Crawl complete: {} pages captured, {} failed in {:?}",
            report.pages_captured, report.pages_failed, report.elapsed
        );

        Ok(report)
    }

    /// Reads the item's markup artifact back and enqueues discovered links
    ///
    /// The read goes through the same sanitized-filename derivation the
    /// capture writer used, which keeps the two paths from drifting apart.
    /// A read failure only skips discovery for this item.
    async fn discover_and_enqueue(
        &mut self,
        item: &FrontierItem,
        artifacts: &CaptureArtifacts,
    ) -> u64 {
        let markup = match tokio::fs::read_to_string(&artifacts.html_path).await {
            Ok(markup) => markup,
            Err(e) => {
                warn!(
                    "Failed to read markup back from {}: {}",
                    artifacts.html_path.display(),
                    e
                );
                return 0;
            }
        };

        let found = discover_links(&markup, &item.url, &self.config.seed_url, &self.visited);
        let count = found.len() as u64;

        debug!(
            "Discovered {} same-origin links on {} at depth {}",
            count, item.url, item.depth
        );

        for url in found {
            self.frontier.enqueue(FrontierItem {
                url,
                depth: item.depth + 1,
            });
        }

        count
    }

    /// Number of distinct URLs processed so far
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// Borrows the archiver driving this crawl
    pub fn archiver(&self) -> &A {
        &self.archiver
    }
}
